//! Lead-request form walkthrough.
//!
//! Run with: cargo run --example lead_form
//!
//! Drives the lead preset end to end without a UI: a blur-time re-check,
//! the optimistic clear on edit, a blocked submit, and a valid submit
//! whose success window closes on a real timer.

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use formwork::controller::FormController;
use formwork::memory::MemoryForm;
use formwork::presets;
use formwork::schedule::TokioScheduler;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn show(form: &MemoryForm, controller: &FormController) {
    for field in controller.spec().field_names() {
        match form.error(field) {
            Some(message) => println!("  {field}: {message}"),
            None => println!("  {field}: ok"),
        }
    }
    println!(
        "  [{}] {}",
        if form.submit_enabled() {
            "enabled"
        } else {
            "disabled"
        },
        form.submit_label()
    );
}

#[tokio::main]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("lead_form.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let preset = presets::lead();
    // Short window so the demo finishes quickly
    let config = preset.config.with_success_delay(Duration::from_secs(1));
    let form = MemoryForm::with_submit_label(&config.submit_label);
    let controller = FormController::new(
        preset.spec,
        config,
        Arc::new(form.clone()),
        Arc::new(TokioScheduler::new()),
    );

    println!("Typing a bad email and leaving the field:");
    form.set_value("email", "ada.example.com");
    controller.blur("email");
    show(&form, &controller);

    println!("\nEditing the email clears the error right away:");
    form.set_value("email", "ada@example.com");
    controller.change("email");
    show(&form, &controller);

    println!("\nSubmitting with the other fields still blank:");
    controller.submit();
    show(&form, &controller);

    println!("\nFilling everything in and submitting:");
    form.set_value("name", "Ada Lovelace");
    form.set_value("phone", "(555) 867-5309");
    form.set_value("brief", "We need a new analytical engine built next quarter.");
    controller.submit();
    show(&form, &controller);

    println!("\nWaiting for the success window to close...");
    tokio::time::sleep(Duration::from_millis(1500)).await;
    show(&form, &controller);
    println!("\nValues cleared: {}", form.values().is_empty());
}
