use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use formwork::controller::{FieldState, FormController};
use formwork::event::FormEvent;
use formwork::memory::MemoryForm;
use formwork::presets::{self, FormPreset};
use formwork::schedule::TokioScheduler;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

/// One live form: a controller wired to an in-memory surface.
struct Session {
    controller: FormController,
    form: MemoryForm,
}

impl Session {
    fn new(preset: FormPreset) -> Self {
        let form = MemoryForm::with_submit_label(&preset.config.submit_label);
        let controller = FormController::new(
            preset.spec,
            preset.config,
            Arc::new(form.clone()),
            Arc::new(TokioScheduler::new()),
        );
        Self { controller, form }
    }

    fn show(&self) {
        println!("{}", self.controller.spec().form_id());
        for field in self.controller.spec().field_names() {
            let state = match self.controller.field_state(field) {
                FieldState::Untouched => "untouched",
                FieldState::Valid => "valid",
                FieldState::Invalid => "invalid",
            };
            match self.form.error(field) {
                Some(message) => {
                    println!("  {field} = {:?} ({state}: {message})", self.form.value(field));
                }
                None => println!("  {field} = {:?} ({state})", self.form.value(field)),
            }
        }
        let trigger = if self.form.submit_enabled() {
            "enabled"
        } else {
            "disabled"
        };
        println!("  [{trigger}] {}", self.form.submit_label());
    }
}

fn preset_named(name: &str) -> Option<FormPreset> {
    match name {
        "lead" => Some(presets::lead()),
        "contact" => Some(presets::contact()),
        "newsletter" => Some(presets::newsletter()),
        _ => None,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  set <field> [value]   type into a field (delivers a change event)");
    println!("  blur <field>          leave a field (delivers a blur event)");
    println!("  submit                activate the trigger");
    println!("  show                  print the current form state");
    println!("  reset                 return the form to its initial state");
    println!("  switch <name>         load another preset: lead, contact, newsletter");
    println!("  quit                  exit");
}

#[tokio::main]
async fn main() {
    let log_file = File::create("formwork-cli.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut session = Session::new(presets::lead());
    println!("Driving the 'lead' form. Type 'help' for commands.");
    session.show();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        match command {
            "set" => {
                let Some(field) = parts.next() else {
                    println!("usage: set <field> [value]");
                    continue;
                };
                let value = parts.collect::<Vec<_>>().join(" ");
                session.form.set_value(field, value);
                session.controller.handle_event(FormEvent::Change {
                    field: field.to_string(),
                });
                session.show();
            }
            "blur" => {
                let Some(field) = parts.next() else {
                    println!("usage: blur <field>");
                    continue;
                };
                session.controller.handle_event(FormEvent::Blur {
                    field: field.to_string(),
                });
                session.show();
            }
            "submit" => {
                session.controller.handle_event(FormEvent::Submit);
                session.show();
            }
            "show" => session.show(),
            "reset" => {
                session.controller.reset();
                session.show();
            }
            "switch" => match parts.next().and_then(preset_named) {
                Some(preset) => {
                    session = Session::new(preset);
                    println!(
                        "Switched to the '{}' form.",
                        session.controller.spec().form_id()
                    );
                    session.show();
                }
                None => println!("usage: switch <lead|contact|newsletter>"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', type 'help'"),
        }
    }
}
