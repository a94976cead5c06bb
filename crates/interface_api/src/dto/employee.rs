//! Employee DTOs

use domain_employee::{Employee, EmployeeDraft, IncrementSummary, LetterAggregate};
use serde::{Deserialize, Serialize};

/// Body of create and update requests
///
/// Missing or `null` fields are accepted here so that an absent name is
/// reported as a validation failure rather than a deserialization error. A
/// client-sent `id` is accepted and ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<i64>,
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(request: EmployeeRequest) -> Self {
        EmployeeDraft::new(request.name.unwrap_or_default(), request.value.unwrap_or_default())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub value: i64,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            value: employee.value,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementResponse {
    pub message: String,
    pub updated_counts: UpdatedCounts,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedCounts {
    pub names_starting_with_e: u64,
    pub names_starting_with_g: u64,
    pub others: u64,
    pub total: u64,
}

impl From<IncrementSummary> for IncrementResponse {
    fn from(summary: IncrementSummary) -> Self {
        Self {
            message: "Values incremented successfully".to_string(),
            updated_counts: UpdatedCounts {
                names_starting_with_e: summary.names_starting_with_e,
                names_starting_with_g: summary.names_starting_with_g,
                others: summary.others,
                total: summary.total(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResponse {
    pub message: String,
    pub results: Vec<AggregateResult>,
    pub criteria: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub first_letter: String,
    pub total_value: i64,
    pub employee_count: i64,
}

impl From<LetterAggregate> for AggregateResult {
    fn from(group: LetterAggregate) -> Self {
        Self {
            first_letter: group.first_letter,
            total_value: group.total_value,
            employee_count: group.employee_count,
        }
    }
}

impl AggregateResponse {
    /// Wraps the qualifying groups with the fixed description texts
    pub fn new(groups: Vec<LetterAggregate>, threshold: i64) -> Self {
        Self {
            message: format!(
                "Aggregate values for names starting with A, B, or C (where sum >= {threshold})"
            ),
            results: groups.into_iter().map(AggregateResult::from).collect(),
            criteria: format!("Names starting with A, B, or C with summed values >= {threshold}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ignores_client_id_and_defaults_missing_fields() {
        let request: EmployeeRequest = serde_json::from_str(r#"{"id": 77}"#).unwrap();
        let draft = EmployeeDraft::from(request);
        assert_eq!(draft, EmployeeDraft::new("", 0));
    }

    #[test]
    fn test_request_null_fields_become_blank_draft() {
        let request: EmployeeRequest =
            serde_json::from_str(r#"{"name": null, "value": null}"#).unwrap();
        let draft = EmployeeDraft::from(request);
        assert_eq!(draft, EmployeeDraft::new("", 0));
        assert!(draft.check().unwrap_err().is_validation());
    }

    #[test]
    fn test_increment_response_wire_names() {
        let summary = IncrementSummary {
            names_starting_with_e: 1,
            names_starting_with_g: 2,
            others: 3,
        };
        let json = serde_json::to_value(IncrementResponse::from(summary)).unwrap();
        assert_eq!(
            json["updatedCounts"],
            serde_json::json!({
                "namesStartingWithE": 1,
                "namesStartingWithG": 2,
                "others": 3,
                "total": 6
            })
        );
    }
}
