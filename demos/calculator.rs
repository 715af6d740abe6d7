//! Price a net amount from the command line.
//!
//! ```text
//! cargo run --example calculator -- 100 23
//! RUST_LOG=allegro_pricing=debug cargo run --example calculator -- abc
//! ```

use allegro_pricing::core::*;
use allegro_pricing::render::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let net_price = args.next().unwrap_or_default();
    let vat = args
        .next()
        .unwrap_or_else(|| VatRate::default().code().to_string());

    let mut calc = Calculator::new();
    calc.set_net_price(net_price);
    calc.select_vat(&vat);

    println!("{}", POLISH.title);
    println!("{}", POLISH.subtitle);
    println!();
    println!("{}: {}", POLISH.net_price_label, calc.input().net_price_text);
    println!("{}: {}", POLISH.vat_label, calc.input().vat_rate);
    println!();

    let mut report = TextReport::new();
    calc.present(&mut report);
    if calc.result().is_some() {
        println!("{}", POLISH.scenarios_title);
    }
    print!("{}", report.output());
}
