//! Example: Quick Session
//!
//! Demonstrates: Driving a calculator session from a key script
//!
//! Run with: `cargo run --example quick_session`
//!
//! Calcular: the whole calculator fits in one value you can print.

use calcular::prelude::*;

fn main() -> Result<(), ScriptError> {
    println!("=== Quick Session Example ===\n");

    // 1. Parse a key script
    println!("1. Parsing key script \"12.5+8=\"...");
    let keys = parse_keys("12.5+8=")?;
    println!("   {} keys parsed", keys.len());

    // 2. Press the keys one at a time, watching the display
    println!("\n2. Pressing keys...");
    let mut session = Session::new();
    for key in keys {
        let notice = session.press(key);
        print!("   {:?} -> display {:?}", key, session.display());
        match notice {
            Some(advisory) => println!("  (advisory: {advisory})"),
            None => println!(),
        }
    }
    println!("   Final phase: {}", session.phase().label());

    // 3. Advisories are returned, never panicked
    println!("\n3. Dividing by zero...");
    let mut session = Session::new();
    let notices = session.feed(parse_keys("9÷0=")?);
    println!(
        "   display {:?}, advisories {:?}",
        session.display(),
        notices
    );

    // 4. An operator after a result starts a fresh expression
    println!("\n4. Typing after a result...");
    let mut session = Session::new();
    session.feed(parse_keys("6×7=")?);
    println!("   6×7 = {}", session.display());
    session.feed(parse_keys("+8=")?);
    println!(
        "   then +8 = {} (the shown result is discarded, not chained)",
        session.display()
    );

    println!("\nQuick session example completed successfully!");
    Ok(())
}
