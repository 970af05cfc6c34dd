//! Student record model and request shapes

use serde::{Deserialize, Serialize};

/// A persisted student record.
///
/// The `id` is an opaque string assigned by the store adapter at insert time
/// and is immutable afterwards. The remaining fields are supplied by the
/// caller and mutated wholesale through [`StudentPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub class: String,
}

/// Candidate record for creation. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub class: String,
}

impl NewStudent {
    /// Materialize a record with the given store-assigned id.
    pub fn into_record(self, id: String) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            age: self.age,
            class: self.class,
        }
    }
}

/// Partial update for an existing record.
///
/// Absent fields retain their prior values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl StudentPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.class.is_none()
    }

    /// Apply the present fields onto `record` in place.
    pub fn apply(&self, record: &mut StudentRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(age) = self.age {
            record.age = age;
        }
        if let Some(class) = &self.class {
            record.class = class.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn asha() -> StudentRecord {
        StudentRecord {
            id: "abc".to_string(),
            name: "Asha".to_string(),
            age: 20,
            class: "CS101".to_string(),
        }
    }

    #[test]
    fn into_record_keeps_all_fields() {
        let new = NewStudent {
            name: "Asha".to_string(),
            age: 20,
            class: "CS101".to_string(),
        };

        let record = new.into_record("abc".to_string());
        assert_eq!(record, asha());
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut record = asha();
        let patch = StudentPatch {
            age: Some(21),
            ..Default::default()
        };

        patch.apply(&mut record);

        assert_eq!(record.age, 21);
        assert_eq!(record.name, "Asha");
        assert_eq!(record.class, "CS101");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut record = asha();
        let patch = StudentPatch::default();

        assert!(patch.is_empty());
        patch.apply(&mut record);
        assert_eq!(record, asha());
    }

    #[test]
    fn patch_deserializes_absent_fields_as_none() {
        let patch: StudentPatch = serde_json::from_value(json!({ "age": 21 })).unwrap();

        assert_eq!(patch.age, Some(21));
        assert!(patch.name.is_none());
        assert!(patch.class.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn record_serializes_with_plain_field_names() {
        let value = serde_json::to_value(asha()).unwrap();

        assert_eq!(value["id"], "abc");
        assert_eq!(value["name"], "Asha");
        assert_eq!(value["age"], 20);
        assert_eq!(value["class"], "CS101");
    }
}
