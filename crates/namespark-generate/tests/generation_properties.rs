use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use namespark_core::{FormInput, Industry, Vibe};
use namespark_generate::{
    GenerateOptions, NameGenerator, PatternId, PatternOutcome, RngChooser, generate_names,
    generate_with_report,
};

const CONCEPTS: [&str; 4] = [
    "AI platform that helps writers",
    "marketplace for handmade ceramics",
    "go to the gym",
    "x",
];

const KEYWORDS: [&str; 3] = ["", "connect, flow, insight", " , green ,"];

fn assert_well_formed(names: &[String]) {
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len(), "duplicate names in {names:?}");
    for name in names {
        assert!(!name.is_empty(), "empty name in {names:?}");
        assert!(!name.contains("undefined"), "placeholder text in {name}");
    }
}

#[test]
fn enumerated_inputs_yield_distinct_names_within_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for industry in Industry::ALL {
        for vibe in Vibe::ALL {
            for concept in CONCEPTS {
                for keywords in KEYWORDS {
                    let input = FormInput::new(concept, industry.key(), vibe.key(), keywords);
                    let mut chooser = RngChooser::new(&mut rng);
                    let names = generate_names(&input, &mut chooser);

                    assert!(
                        (2..=11).contains(&names.len()),
                        "{} names for {input:?}",
                        names.len()
                    );
                    assert_well_formed(&names);
                }
            }
        }
    }
}

#[test]
fn arbitrary_strings_never_produce_empty_or_placeholder_names() {
    let fields = ["", " ", "undefinedness", "Bogus", "Tech", "Techy", ",,,", "ünïcode wörds"];
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for concept in fields {
        for industry in fields {
            for vibe in fields {
                let input = FormInput::new(concept, industry, vibe, concept);
                let mut chooser = RngChooser::new(&mut rng);
                let names = generate_names(&input, &mut chooser);

                assert!(!names.is_empty());
                let unique: HashSet<_> = names.iter().collect();
                assert_eq!(unique.len(), names.len());
                assert!(names.iter().all(|name| !name.is_empty()));
            }
        }
    }
}

#[test]
fn tech_industry_suffix_comes_from_techy_lexicon() {
    let allowed = ["TechWare", "TechSys", "TechNet", "TechCode", "TechAI"];
    let input = FormInput::new("developer tooling", "Tech", "Techy", "");
    for seed in 0..200 {
        let mut chooser = RngChooser::new(ChaCha8Rng::seed_from_u64(seed));
        let result = generate_with_report(&input, &mut chooser);

        match result.report.outcome(PatternId::IndustrySuffix) {
            Some(PatternOutcome::Produced { name }) => {
                assert!(allowed.contains(&name.as_str()), "unexpected {name}");
            }
            other => panic!("industry suffix not produced: {other:?}"),
        }
    }
}

#[test]
fn every_suffix_is_eventually_chosen() {
    let input = FormInput::new("", "Tech", "Techy", "");
    let mut seen = HashSet::new();
    for seed in 0..500 {
        let generator = NameGenerator::new(GenerateOptions { seed: Some(seed) });
        let result = generator.generate(&input);
        if let Some(PatternOutcome::Produced { name }) =
            result.report.outcome(PatternId::IndustrySuffix)
        {
            seen.insert(name.clone());
        }
    }
    assert_eq!(seen.len(), 5, "suffixes seen: {seen:?}");
}

#[test]
fn seeded_generator_is_deterministic() {
    let input = FormInput::new("AI platform that helps writers", "Tech", "Modern", "flow, spark");
    let generator = NameGenerator::new(GenerateOptions { seed: Some(2024) });

    let first = generator.generate(&input);
    let second = generator.generate(&input);

    assert_eq!(first.names, second.names);
}

#[test]
fn unseeded_generator_keeps_structure() {
    let input = FormInput::new("", "Finance", "Premium", "");
    let generator = NameGenerator::default();

    let result = generator.generate(&input);

    assert_eq!(result.names.len(), 7);
    assert_eq!(
        result.names[2..].to_vec(),
        vec!["PremiumHQ", "FinanceSpark", "PremiumWave", "NeoX", "Sparkify"]
    );
    assert!(result.names[0].starts_with("Finance"));
    assert!(result.names[1].starts_with("Premium"));
}
