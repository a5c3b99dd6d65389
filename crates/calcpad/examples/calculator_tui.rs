//! Calculator TUI Example
//!
//! Run with: cargo run -p calcpad --example calculator_tui

fn main() -> std::io::Result<()> {
    let app = calcpad::tui::run_in_terminal()?;
    println!("{}", app.calculator().display());
    Ok(())
}
