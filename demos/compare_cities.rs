use trunfo::compare::{resolve, CardSummary};
use trunfo::core::{parse_count, parse_landmarks, parse_measure, Attribute, CardBuilder};

fn main() {
    println!("=== Super Trunfo: Cities ===\n");

    // Values as they would be typed in, with comma decimals
    let card1 = CardBuilder::new()
        .state("ce")
        .code("A01")
        .name("Fortaleza")
        .population(parse_count("population", "2428708").unwrap())
        .area(parse_measure("area", "312,353").unwrap())
        .gdp(parse_measure("gdp", "73436,1").unwrap())
        .landmarks(parse_landmarks("25").unwrap())
        .build()
        .expect("Card 1 should be valid");

    let card2 = CardBuilder::new()
        .state("pi")
        .code("B01")
        .name("Teresina")
        .population(parse_count("population", "866300").unwrap())
        .area(parse_measure("area", "1391,293").unwrap())
        .gdp(parse_measure("gdp", "24578,9").unwrap())
        .landmarks(parse_landmarks("25").unwrap())
        .build()
        .expect("Card 2 should be valid");

    println!("[Card 1]\n{}", CardSummary(&card1));
    println!("[Card 2]\n{}", CardSummary(&card2));

    let primary = Attribute::LandmarkCount;
    println!("Choose the second attribute:");
    for attribute in Attribute::choices_excluding(Some(primary)) {
        println!("{}) {}", attribute.id(), attribute);
    }
    let secondary: Attribute = "5".parse().expect("5 is a valid option");
    println!("Option: {}\n", secondary.id());

    let outcome = resolve(&card1, &card2, primary, secondary)
        .expect("Primary and secondary attributes differ");
    println!("{}", outcome.report(&card1, &card2));

    #[cfg(feature = "serde")]
    println!("{}", outcome.to_json().expect("Outcome should serialize"));
}
