pub mod generate_tags;
pub mod input_gate;
