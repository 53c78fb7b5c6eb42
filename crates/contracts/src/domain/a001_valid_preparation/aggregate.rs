use crate::domain::common::{Pagination, Timestamp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Aggregate
// ============================================================================

/// A named food-preparation technique ("dice", "mince", ...).
///
/// Instances start zeroed and are then populated from a server response. The type
/// deliberately has no `PartialEq`: records are compared with [`ValidPreparation::are_equal`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidPreparation {
    /// `0` until the server assigns one
    pub id: u64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub applicable_to_all_ingredients: bool,
    pub created_on: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_on: Option<Timestamp>,
}

impl ValidPreparation {
    /// Empty record: zero id, empty strings, not applicable to all ingredients, no timestamps
    pub fn new() -> Self {
        Self::default()
    }

    /// Structural equality over identity, descriptive fields and `archived_on`.
    ///
    /// `created_on` and `updated_on` are not compared.
    pub fn are_equal(a: &ValidPreparation, b: &ValidPreparation) -> bool {
        a.id == b.id
            && a.name == b.name
            && a.description == b.description
            && a.icon == b.icon
            && a.applicable_to_all_ingredients == b.applicable_to_all_ingredients
            && a.archived_on == b.archived_on
    }

    pub fn is_archived(&self) -> bool {
        self.archived_on.is_some()
    }

    pub fn mark_updated(&mut self, at: Timestamp) {
        self.updated_on = Some(at);
    }

    /// Soft-delete. The first archive timestamp is kept.
    pub fn archive(&mut self, at: Timestamp) {
        if self.archived_on.is_none() {
            self.archived_on = Some(at);
        }
    }

    /// Overwrite the editable fields from a form. Identity and timestamps are untouched.
    pub fn apply(&mut self, dto: &ValidPreparationDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.icon = dto.icon.clone();
        self.applicable_to_all_ingredients = dto.applicable_to_all_ingredients;
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
}

/// Creation/update input for a valid preparation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidPreparationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub applicable_to_all_ingredients: bool,
}

impl ValidPreparationDto {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

impl From<&ValidPreparation> for ValidPreparationDto {
    fn from(vp: &ValidPreparation) -> Self {
        Self {
            id: Some(vp.id),
            name: vp.name.clone(),
            description: vp.description.clone(),
            icon: vp.icon.clone(),
            applicable_to_all_ingredients: vp.applicable_to_all_ingredients,
        }
    }
}

/// One page of valid preparations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidPreparationList {
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub data: Vec<ValidPreparation>,
}

impl ValidPreparationList {
    pub fn active(&self) -> impl Iterator<Item = &ValidPreparation> {
        self.data.iter().filter(|vp| !vp.is_archived())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dice() -> ValidPreparation {
        ValidPreparation {
            id: 1,
            name: "dice".to_string(),
            description: "cut into cubes".to_string(),
            icon: "knife".to_string(),
            applicable_to_all_ingredients: false,
            created_on: 1000,
            updated_on: None,
            archived_on: None,
        }
    }

    #[test]
    fn test_new_is_zeroed() {
        let vp = ValidPreparation::new();
        assert_eq!(vp.id, 0);
        assert_eq!(vp.name, "");
        assert_eq!(vp.description, "");
        assert_eq!(vp.icon, "");
        assert!(!vp.applicable_to_all_ingredients);
        assert_eq!(vp.created_on, 0);
        assert_eq!(vp.updated_on, None);
        assert_eq!(vp.archived_on, None);
    }

    #[test]
    fn test_timestamps_other_than_archived_are_ignored() {
        let v1 = dice();
        let v2 = ValidPreparation {
            created_on: 2000,
            updated_on: Some(3000),
            ..dice()
        };
        assert!(ValidPreparation::are_equal(&v1, &v2));
    }

    #[test]
    fn test_name_difference_is_detected() {
        let v1 = dice();
        let v3 = ValidPreparation {
            name: "mince".to_string(),
            ..dice()
        };
        assert!(!ValidPreparation::are_equal(&v1, &v3));
    }

    #[test]
    fn test_archived_on_is_compared() {
        let v1 = dice();
        let mut v2 = dice();
        v2.archived_on = Some(5000);
        assert!(!ValidPreparation::are_equal(&v1, &v2));
        assert!(!ValidPreparation::are_equal(&v2, &v1));

        let mut v3 = dice();
        v3.archived_on = Some(5000);
        assert!(ValidPreparation::are_equal(&v2, &v3));
    }

    #[test]
    fn test_archive_keeps_first_timestamp() {
        let mut vp = dice();
        assert!(!vp.is_archived());
        vp.archive(5000);
        vp.archive(6000);
        assert!(vp.is_archived());
        assert_eq!(vp.archived_on, Some(5000));
    }

    #[test]
    fn test_mark_updated() {
        let mut vp = dice();
        vp.mark_updated(1500);
        assert_eq!(vp.updated_on, Some(1500));
        assert!(ValidPreparation::are_equal(&vp, &dice()));
    }

    #[test]
    fn test_apply_form_keeps_identity() {
        let mut vp = dice();
        let dto = ValidPreparationDto {
            id: None,
            name: "mince".to_string(),
            description: "cut very finely".to_string(),
            icon: "cleaver".to_string(),
            applicable_to_all_ingredients: true,
        };
        vp.apply(&dto);
        assert_eq!(vp.id, 1);
        assert_eq!(vp.created_on, 1000);
        assert_eq!(vp.name, "mince");
        assert_eq!(vp.icon, "cleaver");
        assert!(vp.applicable_to_all_ingredients);
    }

    #[test]
    fn test_dto_from_record_round_trips_through_apply() {
        let original = dice();
        let dto = ValidPreparationDto::from(&original);
        assert_eq!(dto.id, Some(1));
        assert!(!dto.is_new());

        let mut copy = original.clone();
        copy.apply(&dto);
        assert!(ValidPreparation::are_equal(&original, &copy));
    }

    #[test]
    fn test_validate_requires_name() {
        let mut dto = ValidPreparationDto::default();
        assert!(dto.is_new());
        assert_eq!(dto.validate(), Err(ValidationError::EmptyName));

        dto.name = "   ".to_string();
        assert_eq!(dto.validate(), Err(ValidationError::EmptyName));

        dto.name = "julienne".to_string();
        assert_eq!(dto.validate(), Ok(()));
    }

    #[test]
    fn test_serializes_camel_case_and_omits_absent_timestamps() {
        let json = serde_json::to_value(dice()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "dice",
                "description": "cut into cubes",
                "icon": "knife",
                "applicableToAllIngredients": false,
                "createdOn": 1000
            })
        );
    }

    #[test]
    fn test_deserializes_partial_server_response() {
        let vp: ValidPreparation = serde_json::from_str(
            r#"{"id":9,"name":"grate","archivedOn":7000,"updatedOn":null}"#,
        )
        .unwrap();
        assert_eq!(vp.id, 9);
        assert_eq!(vp.name, "grate");
        assert_eq!(vp.description, "");
        assert_eq!(vp.created_on, 0);
        assert_eq!(vp.updated_on, None);
        assert_eq!(vp.archived_on, Some(7000));
    }

    #[test]
    fn test_list_active_skips_archived() {
        let mut archived = dice();
        archived.id = 2;
        archived.archive(4000);
        let list = ValidPreparationList {
            pagination: Pagination::default(),
            data: vec![dice(), archived],
        };
        let active: Vec<u64> = list.active().map(|vp| vp.id).collect();
        assert_eq!(active, vec![1]);
    }

    fn arb_preparation() -> impl Strategy<Value = ValidPreparation> {
        (
            any::<u64>(),
            "[a-z]{0,8}",
            "[a-z ]{0,16}",
            "[a-z]{0,8}",
            any::<bool>(),
            any::<u64>(),
            proptest::option::of(any::<u64>()),
            proptest::option::of(any::<u64>()),
        )
            .prop_map(
                |(id, name, description, icon, applicable, created_on, updated_on, archived_on)| {
                    ValidPreparation {
                        id,
                        name,
                        description,
                        icon,
                        applicable_to_all_ingredients: applicable,
                        created_on,
                        updated_on,
                        archived_on,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn prop_are_equal_is_reflexive(v in arb_preparation()) {
            prop_assert!(ValidPreparation::are_equal(&v, &v));
        }

        #[test]
        fn prop_are_equal_is_symmetric(a in arb_preparation(), b in arb_preparation()) {
            prop_assert_eq!(
                ValidPreparation::are_equal(&a, &b),
                ValidPreparation::are_equal(&b, &a)
            );
        }

        #[test]
        fn prop_ignores_created_and_updated(
            v in arb_preparation(),
            created_on in any::<u64>(),
            updated_on in proptest::option::of(any::<u64>()),
        ) {
            let other = ValidPreparation { created_on, updated_on, ..v.clone() };
            prop_assert!(ValidPreparation::are_equal(&v, &other));
        }

        #[test]
        fn prop_detects_newly_archived(v in arb_preparation(), at in any::<u64>()) {
            let v1 = ValidPreparation { archived_on: None, ..v };
            let mut v2 = v1.clone();
            v2.archived_on = Some(at);
            prop_assert!(!ValidPreparation::are_equal(&v1, &v2));
        }
    }
}
