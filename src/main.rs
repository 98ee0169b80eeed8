use contour::cli;

fn main() {
    let code = cli::process_cli();
    log::logger().flush();
    // Non-zero exit: use process::exit so the shell sees the correct exit code.
    if code != 0 {
        std::process::exit(code);
    }
}
