/**
 * Admin Password Hash Generator
 *
 * Small utility for seeding or rotating the admin credential out of band:
 * prints the bcrypt hash of the password given as the first argument, for
 * insertion into the `admin_users` table.
 *
 * Usage: `cargo run --bin hashgen -- '<password>'`
 */

use lamsa_site::auth::credentials::hash_password;

fn main() {
    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            eprintln!("usage: hashgen <password>");
            std::process::exit(1);
        }
    };

    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
