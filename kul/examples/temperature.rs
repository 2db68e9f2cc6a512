//! Absolute temperatures versus temperature intervals.

use kul::{Celsius, DegreesCelsius, DegreesFahrenheit, ElectronvoltTemperatures, Fahrenheit, Kelvin, Kelvins};
use kul::{FahrenheitInterval, KelvinInterval};

fn main() {
    let body = DegreesFahrenheit::new(98.6);
    println!("{body} = {:.2}", body.to::<Celsius>());

    let zero = Kelvins::new(0.0);
    println!("{zero} = {:.2} = {:.2}", zero.to::<Celsius>(), zero.to::<Fahrenheit>());

    // The difference of two temperatures is an interval, not a temperature.
    let morning = DegreesCelsius::new(12.0);
    let noon = DegreesCelsius::new(21.0);
    let rise = noon - morning;
    let rise_k: KelvinInterval = rise.into();
    let rise_f: FahrenheitInterval = rise.into();
    println!("warmed by {rise} = {rise_k} = {rise_f:.1}");

    let plasma = ElectronvoltTemperatures::new(15.0e3);
    println!("{plasma} = {:.1}", plasma.to::<Kelvin>());
}
