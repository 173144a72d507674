use colored::Colorize;

/// Prints a bold section heading.
pub fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

pub fn info(message: &str) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: &str) {
    println!("{} {}", "[ok]".green(), message);
}

pub fn warn(message: &str) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "[x]".red(), message);
}
