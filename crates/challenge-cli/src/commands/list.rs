use challenge_core::Config;

pub fn run(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.challenges)?);
        return Ok(());
    }

    for (i, challenge) in config.challenges.iter().enumerate() {
        println!("{:>2}. {:<16} {}", i + 1, challenge.title, challenge.time_label());
    }
    Ok(())
}
