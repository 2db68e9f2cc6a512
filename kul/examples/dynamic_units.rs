//! Units chosen at run time.
//!
//! Run with `cargo run --example dynamic_units -- m s` to divide metres by seconds, or pick other symbols from the
//! table below.

use kul::{Celsius, DynQuantity, DynUnit, Fahrenheit, Foot, Hour, Inch, Kelvin, Meter, Minute, Second, Unit};

fn lookup(symbol: &str) -> Option<DynUnit> {
    let unit = match symbol {
        "m" => Meter::to_dynamic(),
        "in" => Inch::to_dynamic(),
        "ft" => Foot::to_dynamic(),
        "s" => Second::to_dynamic(),
        "min" => Minute::to_dynamic(),
        "h" => Hour::to_dynamic(),
        "K" => Kelvin::to_dynamic(),
        "degC" => Celsius::to_dynamic(),
        "degF" => Fahrenheit::to_dynamic(),
        _ => return None,
    };
    Some(unit)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let numerator = args.first().map(String::as_str).unwrap_or("ft");
    let denominator = args.get(1).map(String::as_str).unwrap_or("min");

    let (Some(num), Some(den)) = (lookup(numerator), lookup(denominator)) else {
        eprintln!("unknown unit symbol");
        std::process::exit(1);
    };

    let rate = DynQuantity::new(3.0, num.clone()) / DynQuantity::new(1.0, den);
    println!("rate: {rate}");

    let target = Meter::to_dynamic() / Second::to_dynamic();
    match rate.to(&target) {
        Ok(converted) => println!("     = {converted}"),
        Err(err) => println!("     cannot express in {target}: {err}"),
    }

    match DynQuantity::new(3.0, num).sqrt() {
        Ok(root) => println!("sqrt: {root}"),
        Err(err) => println!("sqrt: {err}"),
    }
}
