//! Serializing static and dynamic quantities.
//!
//! Run with: cargo run --example serialization --features serde

#[cfg(feature = "serde")]
fn main() {
    use kul::{DegreesCelsius, DynQuantity, Meter, Meters, Second, Seconds, Unit};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct Probe {
        // Value plus unit name; the unit is checked on the way back in.
        #[serde(with = "kul::serde_with_unit")]
        temperature: DegreesCelsius,

        // Raw value only.
        depth: Meters,
        interval: Seconds,
    }

    let probe = Probe {
        temperature: DegreesCelsius::new(4.2),
        depth: Meters::new(120.0),
        interval: Seconds::new(30.0),
    };

    let json = serde_json::to_string_pretty(&probe).expect("serialize probe");
    println!("{json}");

    let back: Probe = serde_json::from_str(&json).expect("deserialize probe");
    println!("{back:?}");

    let wrong = r#"{"temperature":{"value":4.2,"unit":"°F"},"depth":120.0,"interval":30.0}"#;
    match serde_json::from_str::<Probe>(wrong) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {err}"),
    }

    let speed = DynQuantity::new(3.0, Meter::to_dynamic()) / DynQuantity::new(1.0, Second::to_dynamic());
    println!("{}", serde_json::to_string(&speed).expect("serialize dynamic quantity"));
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
