//! End-to-end validation of service representations.

use pretty_assertions::assert_eq;
use serde_json::json;

use super::{CandidatePolicy, ContractValidator, ValidatorConfig};
use crate::core::{DestinationType, Outcome, Service};
use crate::representation::{parse_service, read_service, write_service, ServiceBuilder};
use crate::schema::{ObjectSchema, SchemaNode, StringSchema};
use crate::testing::{
    assert_all_ok, assert_result_failed, assert_result_ok, consumer_service, order_schema,
    provider_service, PROVIDER,
};

fn service_json(value: serde_json::Value) -> Service {
    parse_service(&value.to_string()).unwrap()
}

#[test]
fn test_compatible_services() {
    let results = ContractValidator::new()
        .validate(&consumer_service(), &provider_service())
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_all_ok(&results);
}

#[test]
fn test_only_expectations_on_the_provider_are_checked() {
    let consumer = ServiceBuilder::new("audit")
        .expects("someone-else", DestinationType::Queue, "x", SchemaNode::string())
        .expects(PROVIDER, DestinationType::Topic, "orders", SchemaNode::object())
        .expects("someone-else", DestinationType::Queue, "y", SchemaNode::string())
        .build();

    let results = ContractValidator::new()
        .validate(&consumer, &provider_service())
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_result_ok(&results[0]);
}

#[test]
fn test_no_expectations_on_provider_yields_empty_list() {
    let consumer = ServiceBuilder::new("loner").build();
    let results = ContractValidator::new()
        .validate(&consumer, &provider_service())
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_every_expectation_gets_a_result_in_order() {
    let missing_ts: SchemaNode = ObjectSchema::new()
        .with_property("id", SchemaNode::integer().with_required(true))
        .with_property("ts", SchemaNode::string())
        .into();

    let consumer = ServiceBuilder::new("reporting")
        .expects(PROVIDER, DestinationType::Queue, "orders", SchemaNode::object())
        .expects(PROVIDER, DestinationType::Topic, "orders", missing_ts)
        .expects(PROVIDER, DestinationType::Topic, "orders", order_schema())
        .expects(PROVIDER, DestinationType::TemporaryQueue, "r", SchemaNode::integer())
        .build();

    let results = ContractValidator::new()
        .validate(&consumer, &provider_service())
        .unwrap();

    let outcomes: Vec<_> = results.iter().map(|r| r.outcome()).collect();
    assert_eq!(
        outcomes,
        vec![Outcome::Failed, Outcome::Failed, Outcome::Ok, Outcome::Failed]
    );
    assert_result_failed(&results[0], "missing endpoint: QUEUE orders");
    assert_result_failed(
        &results[1],
        "is missing properties [ts] expected by consumer, provider offers [customer, id, lines, status]",
    );
    assert_result_failed(&results[3], "schema kind mismatch: consumer=<-,integer>, provider=<Ack,string>");
}

#[test]
fn test_nested_diagnostics_carry_paths() {
    let consumer = service_json(json!({
        "name": "crm",
        "expectations": {"providerNameToContracts": {PROVIDER: [{
            "destinationType": "TOPIC",
            "destinationName": "orders",
            "schema": {
                "type": "object",
                "id": "OrderPlaced",
                "properties": {
                    "customer": {
                        "type": "object",
                        "id": "Customer",
                        "properties": {
                            "id": {"type": "string"},
                            "email": {"type": "string", "pattern": "^[a-z]+@example\\.com$"}
                        }
                    },
                    "status": {"type": "string", "enum": ["PLACED", "CANCELLED"]}
                }
            }
        }]}}
    }));

    let results = ContractValidator::new()
        .validate(&consumer, &provider_service())
        .unwrap();
    let errors = results[0].errors();

    assert_eq!(
        errors,
        [
            "candidate 1 (TOPIC orders (schema OrderPlaced)): schema - has mismatching pattern: \
             consumer=\"^[a-z]+@example\\\\.com$\", provider=\"^.+@.+$\" (at $.customer.email)"
                .to_string(),
            "candidate 1 (TOPIC orders (schema OrderPlaced)): schema kind mismatch: \
             consumer=<-,string>, provider=<-,integer> (at $.customer.id)"
                .to_string(),
            "candidate 1 (TOPIC orders (schema OrderPlaced)): schema - has mismatching enums: \
             consumer=[\"CANCELLED\",\"PLACED\"], provider=[\"PAID\",\"PLACED\",\"SHIPPED\"] \
             (at $.status)"
                .to_string(),
        ]
    );
}

#[test]
fn test_unique_schema_id_policy_end_to_end() {
    let provider = ServiceBuilder::new(PROVIDER)
        .produces(DestinationType::Queue, "events", SchemaNode::string().with_id("Created"))
        .produces(DestinationType::Queue, "events", SchemaNode::string().with_id("Deleted"))
        .build();
    let consumer = ServiceBuilder::new("listener")
        .expects(PROVIDER, DestinationType::Queue, "events", SchemaNode::string().with_id("Deleted"))
        .expects(PROVIDER, DestinationType::Queue, "events", SchemaNode::string().with_id("Updated"))
        .build();

    let validator = ContractValidator::new().with_config(
        ValidatorConfig::new().with_candidate_policy(CandidatePolicy::UniqueSchemaId),
    );
    let results = validator.validate(&consumer, &provider).unwrap();

    assert_result_ok(&results[0]);
    assert_result_failed(&results[1], "missing message with schema id Updated at QUEUE events");
}

#[test]
fn test_first_compatible_ignores_schema_ids() {
    let provider = ServiceBuilder::new(PROVIDER)
        .produces(DestinationType::Queue, "events", SchemaNode::integer().with_id("A"))
        .produces(DestinationType::Queue, "events", SchemaNode::string().with_id("B"))
        .build();
    let consumer = ServiceBuilder::new("listener")
        .expects(PROVIDER, DestinationType::Queue, "events", SchemaNode::string().with_id("Z"))
        .build();

    let results = ContractValidator::new().validate(&consumer, &provider).unwrap();
    assert_result_ok(&results[0]);
}

#[test]
fn test_validate_representations_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let consumer_path = write_service(&consumer_service(), dir.path()).unwrap();
    let provider_path = write_service(&provider_service(), dir.path()).unwrap();

    let consumer = read_service(consumer_path).unwrap();
    let provider = read_service(provider_path).unwrap();
    let results = ContractValidator::new().validate(&consumer, &provider).unwrap();
    assert_all_ok(&results);
}

#[test]
fn test_strict_enums_end_to_end() {
    let provider = ServiceBuilder::new(PROVIDER)
        .produces(DestinationType::Topic, "colours", SchemaNode::string())
        .build();
    let consumer = ServiceBuilder::new("painter")
        .expects(
            PROVIDER,
            DestinationType::Topic,
            "colours",
            StringSchema::new().with_enums(["RED", "GREEN"]).into(),
        )
        .build();

    let lenient = ContractValidator::new().validate(&consumer, &provider).unwrap();
    assert_result_ok(&lenient[0]);

    let strict = ContractValidator::new()
        .with_config(ValidatorConfig::new().with_strict_enums(true))
        .validate(&consumer, &provider)
        .unwrap();
    assert_result_failed(&strict[0], "has mismatching enums");
}

#[test]
fn test_result_serialization_shape() {
    let consumer = ServiceBuilder::new("c")
        .expects(PROVIDER, DestinationType::Queue, "nowhere", SchemaNode::string())
        .build();
    let results = ContractValidator::new()
        .validate(&consumer, &provider_service())
        .unwrap();

    let value = serde_json::to_value(&results).unwrap();
    assert_eq!(
        value,
        json!([{
            "subject": "QUEUE nowhere (schema -)",
            "outcome": "FAILED",
            "errors": ["missing endpoint: QUEUE nowhere"]
        }])
    );
}
