//! Event Form Example
//!
//! Drives the event-details form the way a page would: fields are edited,
//! blur triggers validation after the configured debounce, and the submit
//! state is reported after each step.

use std::fs::File;

use formgate::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn set(gate: &FormGate<SubmitState>, name: &str, value: &str) {
    if let Some(field) = gate.field(name) {
        field.set_value(value);
    }
}

/// Blur a field: wait out its debounce, then validate.
async fn blur(gate: &FormGate<SubmitState>, name: &str) {
    if let Some(field) = gate.field(name)
        && let Some(wait) = field.blur_wait()
    {
        tokio::time::sleep(wait).await;
    }
    if let Err(e) = gate.validate(name) {
        eprintln!("Error: {}", e);
    }
}

fn report(gate: &FormGate<SubmitState>, submit: &SubmitState) {
    for name in gate.tracked() {
        let indicator = gate
            .field(&name)
            .map(|field| field.indicator())
            .unwrap_or_default();
        let marker = match indicator {
            Indicator::None => String::new(),
            Indicator::Valid(marker) | Indicator::Invalid(marker) => marker,
        };
        println!("  {:<16} {}", name, marker);
    }
    println!("  submit enabled: {}", submit.is_enabled());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("event_form.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let submit = SubmitState::new();
    let gate = FormGate::new(submit.clone());
    if let Err(e) = register_all(&gate, &event_details()) {
        eprintln!("Error: {}", e);
        return;
    }

    println!("Filling the form with a bad signup deadline:");
    set(&gate, "signup_deadline", "13/40/2020");
    set(&gate, "exchange_date", "12/25/2020");
    set(&gate, "price", "$10.00");
    set(&gate, "location", "NYC");
    for name in gate.tracked() {
        blur(&gate, &name).await;
    }
    report(&gate, &submit);

    println!("Correcting the deadline:");
    set(&gate, "signup_deadline", "01/15/2020");
    blur(&gate, "signup_deadline").await;
    report(&gate, &submit);
}
