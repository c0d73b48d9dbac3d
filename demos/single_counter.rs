//! Single Counter
//!
//! This example starts the counter the way a host application would:
//! install verbose logging for updates, build the program from its initial
//! model, update function and commands, then drive it.
//!
//! Key concepts:
//! - Named commands, with `Reset` gated by `can_reset`
//! - Direct messages, including a step size change
//! - Read projections refreshed after every update
//!
//! Run with: cargo run --example single_counter

use single_counter::counter::{self, Model, Msg, DECREMENT, INCREMENT, RESET};
use single_counter::logging::{init_logging, LogConfig};
use single_counter::Program;

fn show(program: &Program<Model, Msg>) {
    let model = program.model();
    println!(
        "  CounterValue = {}, StepSize = {}, Reset enabled = {}",
        counter::counter_value(model),
        counter::step_size_value(model),
        counter::can_reset_value(model),
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LogConfig::default())?;

    println!("=== Single Counter Example ===\n");

    let mut program = counter::program()?;
    println!("Initial model:");
    show(&program);

    println!("\nReset before any change is disabled:");
    println!("  dispatched = {}", program.dispatch_command(RESET)?);

    println!("\nIncrement twice:");
    program.dispatch_command(INCREMENT)?;
    program.dispatch_command(INCREMENT)?;
    show(&program);

    println!("\nStep size 5, increment, decrement:");
    program.dispatch(Msg::SetStepSize(5));
    program.dispatch_command(INCREMENT)?;
    program.dispatch_command(DECREMENT)?;
    show(&program);

    println!("\nReset:");
    println!("  dispatched = {}", program.dispatch_command(RESET)?);
    show(&program);

    println!("\nMessages dispatched: {}", program.transitions());
    println!("\n=== Example Complete ===");
    Ok(())
}
