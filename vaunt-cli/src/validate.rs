use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use vaunt::core::ValidationResult;
use vaunt::representation::read_service;
use vaunt::validator::{CandidatePolicy, ContractValidator, ValidatorConfig};

#[derive(Debug, Parser)]
#[command(after_help = EXAMPLES_TEXT)]
pub struct Validate {
    #[arg(long, short = 'c', help = "Path to the consumer service representation")]
    pub consumer: PathBuf,

    #[arg(long, short = 'p', help = "Path to the provider service representation")]
    pub provider: PathBuf,

    #[arg(long, help = "Path to a JSON validator configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Reject constrained consumer enums against unconstrained providers")]
    pub strict_enums: bool,

    #[arg(long, value_enum, help = "How to pick among contracts on the same endpoint")]
    pub candidate_policy: Option<PolicyArg>,

    #[arg(
        long,
        short = 'o',
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum PolicyArg {
    FirstCompatible,
    UniqueSchemaId,
}

impl From<PolicyArg> for CandidatePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FirstCompatible => CandidatePolicy::FirstCompatible,
            PolicyArg::UniqueSchemaId => CandidatePolicy::UniqueSchemaId,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

const EXAMPLES_TEXT: &str = r#"
EXAMPLES:
    # Validate billing-service expectations against order-service
    vaunt validate --consumer ./reps/billing-service.json \
        --provider ./reps/order-service.json

    # Require a unique schema id per endpoint and print JSON
    vaunt validate -c billing.json -p orders.json \
        --candidate-policy unique-schema-id --format json
"#;

/// Loads the configuration file, if any, and applies flag overrides.
fn load_config(args: &Validate) -> Result<ValidatorConfig> {
    let mut config = match &args.config {
        Some(path) => ValidatorConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    if args.strict_enums {
        config = config.with_strict_enums(true);
    }
    if let Some(policy) = args.candidate_policy {
        config = config.with_candidate_policy(policy.into());
    }
    debug!(
        file = ?args.config,
        candidate_policy = %config.candidate_policy,
        strict_enums = config.strict_enums,
        max_depth = ?config.max_depth,
        "Loaded validator config"
    );
    Ok(config)
}

/// Runs validation and prints the results; returns whether all passed.
pub fn handle_validate(args: &Validate, out: &mut impl Write) -> Result<bool> {
    let config = load_config(args)?;
    debug!(
        consumer = %args.consumer.display(),
        provider = %args.provider.display(),
        "Reading service representations"
    );
    let consumer = read_service(&args.consumer)
        .with_context(|| format!("Failed to read consumer {}", args.consumer.display()))?;
    let provider = read_service(&args.provider)
        .with_context(|| format!("Failed to read provider {}", args.provider.display()))?;

    let results = ContractValidator::new()
        .with_config(config)
        .validate(&consumer, &provider)
        .context("Validation aborted")?;

    match args.format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
        }
        OutputFormat::Text => print_text(&consumer.name, &provider.name, &results, out)?,
    }

    Ok(results.iter().all(ValidationResult::is_ok))
}

fn print_text(
    consumer: &str,
    provider: &str,
    results: &[ValidationResult],
    out: &mut impl Write,
) -> Result<()> {
    for result in results {
        writeln!(out, "{result}")?;
    }
    let failed = results.iter().filter(|r| !r.is_ok()).count();
    writeln!(
        out,
        "{consumer} -> {provider}: {} expectation(s), {} passed, {failed} failed",
        results.len(),
        results.len() - failed
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use vaunt::core::DestinationType;
    use vaunt::representation::{write_service, ServiceBuilder};
    use vaunt::schema::{SchemaNode, StringSchema};
    use vaunt::testing::{consumer_service, provider_service};

    fn args(consumer: &Path, provider: &Path) -> Validate {
        Validate {
            consumer: consumer.to_path_buf(),
            provider: provider.to_path_buf(),
            config: None,
            strict_enums: false,
            candidate_policy: None,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_compatible_services_pass() {
        let dir = tempfile::tempdir().unwrap();
        let consumer = write_service(&consumer_service(), dir.path()).unwrap();
        let provider = write_service(&provider_service(), dir.path()).unwrap();

        let mut out = Vec::new();
        let passed = handle_validate(&args(&consumer, &provider), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(passed);
        assert!(text.starts_with("OK TOPIC orders (schema OrderPlaced)"));
        assert!(text.ends_with(
            "billing-service -> order-service: 2 expectation(s), 2 passed, 0 failed\n"
        ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ServiceBuilder::new("p")
            .produces(DestinationType::Queue, "q", SchemaNode::string())
            .build();
        let consumer = ServiceBuilder::new("c")
            .expects("p", DestinationType::Queue, "q", StringSchema::new().with_enums(["A"]).into())
            .build();
        let consumer_path = write_service(&consumer, dir.path()).unwrap();
        let provider_path = write_service(&provider, dir.path()).unwrap();

        let mut lenient = args(&consumer_path, &provider_path);
        assert!(handle_validate(&lenient, &mut Vec::new()).unwrap());

        lenient.strict_enums = true;
        lenient.format = OutputFormat::Json;
        let mut out = Vec::new();
        assert!(!handle_validate(&lenient, &mut out).unwrap());

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["outcome"], "FAILED");
    }

    #[test]
    fn test_config_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("vaunt.json");
        std::fs::write(&config_path, r#"{"candidate_policy": "unique-schema-id"}"#).unwrap();

        let mut validate = args(Path::new("c.json"), Path::new("p.json"));
        validate.config = Some(config_path);
        let config = load_config(&validate).unwrap();
        assert_eq!(config.candidate_policy, CandidatePolicy::UniqueSchemaId);

        validate.candidate_policy = Some(PolicyArg::FirstCompatible);
        let config = load_config(&validate).unwrap();
        assert_eq!(config.candidate_policy, CandidatePolicy::FirstCompatible);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = handle_validate(
            &args(Path::new("/no/consumer.json"), Path::new("/no/provider.json")),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read consumer /no/consumer.json"));
    }
}
