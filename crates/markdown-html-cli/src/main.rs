use std::process;

fn main() {
    match markdown_html_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("markdown-html error: {err:#}");
            process::exit(1);
        }
    }
}
