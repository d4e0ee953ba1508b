use namespark_core::FormInput;
use namespark_generate::{GenerateOptions, NameGenerator};

fn main() {
    let input = FormInput::new(
        "An AI platform that helps writers overcome creative block",
        "Creative",
        "Playful",
        "connect, flow, insight",
    );
    let generator = NameGenerator::new(GenerateOptions { seed: Some(7) });
    for name in generator.generate(&input).names {
        println!("{name}");
    }
}
