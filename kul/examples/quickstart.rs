//! Minimal end-to-end example: convert units and compose a velocity (length / time).

use kul::velocity::Velocity;
use kul::{Joule, Kilometer, Kilometers, Meter, Second, Seconds, Watts};

fn main() {
    let d = Kilometers::new(1_000.0);
    let t = Seconds::new(100.0);
    let v: Velocity<Kilometer, Second> = d / t;
    assert!((v.value() - 10.0).abs() < 1e-12);

    let v = v.to::<kul::Per<Meter, Second>>();
    println!("{v}");

    let energy = (Watts::new(60.0) * Seconds::new(30.0)).to::<Joule>();
    println!("a 60 W bulb uses {energy} in 30 s");
}
