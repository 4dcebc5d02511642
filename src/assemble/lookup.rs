//! Record lookup with inheritance resolution.
//!
//! Doc comments are authored once, on the declaring type. A derived type
//! therefore collects its own records plus those of every qualifying
//! ancestor, so inherited members still find their descriptions by name.

use crate::metadata::{MetadataSource, TypeInfo};
use crate::model::MemberRecord;

/// Records authored on `ty` itself: its type-level summary, its members,
/// and the members of types nested inside it.
///
/// The namespace-path match is a plain string prefix, so `Geo.Shape` also
/// picks up records of a sibling such as `Geo.ShapeSet`.
pub fn own_records<'r>(ty: &TypeInfo, records: &'r [MemberRecord]) -> Vec<&'r MemberRecord> {
    let path = ty.doc_path();
    records
        .iter()
        .filter(|r| r.namespace_path.starts_with(&path) || r.full_path() == path)
        .collect()
}

/// Own records of `ty` followed by the own records of each qualifying
/// ancestor, in qualifying-set order.
///
/// The strict-subtype relation over a closed type set is acyclic, so no
/// visited set is kept.
pub fn records_for<'r, M: MetadataSource + ?Sized>(
    source: &M,
    qualifying: &[&TypeInfo],
    ty: &TypeInfo,
    records: &'r [MemberRecord],
) -> Vec<&'r MemberRecord> {
    let mut matches = own_records(ty, records);
    for ancestor in qualifying {
        if source.is_strict_subtype(ty, ancestor) {
            matches.extend(own_records(ancestor, records));
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Manifest;
    use crate::model::MemberKind;

    fn record(kind: MemberKind, namespace_path: &str, name: &str) -> MemberRecord {
        MemberRecord {
            name: name.to_string(),
            namespace_path: namespace_path.to_string(),
            description: format!("{} docs", name),
            kind,
            parameters: Vec::new(),
        }
    }

    fn manifest() -> Manifest {
        Manifest::from_json(
            r#"{ "types": [
                { "full_name": "Geo.Shape", "namespace": "Geo" },
                { "full_name": "Geo.Circle", "namespace": "Geo", "bases": ["Geo.Shape"] },
                { "full_name": "Geo.Ring", "namespace": "Geo", "bases": ["Geo.Circle", "Geo.Shape"] },
                { "full_name": "Geo.Shape+Outline", "namespace": "Geo" }
            ] }"#,
        )
        .unwrap()
    }

    fn records() -> Vec<MemberRecord> {
        vec![
            record(MemberKind::Type, "Geo", "Shape"),
            record(MemberKind::Property, "Geo.Shape", "Id"),
            record(MemberKind::Type, "Geo.Shape", "Outline"),
            record(MemberKind::Field, "Geo.Shape.Outline", "Width"),
            record(MemberKind::Type, "Geo", "Circle"),
            record(MemberKind::Field, "Geo.Circle", "Radius"),
            record(MemberKind::Field, "Geo.Ring", "Inner"),
            record(MemberKind::Field, "Geo.ShapeSet", "Items"),
        ]
    }

    fn names(found: &[&MemberRecord]) -> Vec<String> {
        found.iter().map(|r| r.full_path()).collect()
    }

    #[test]
    fn own_records_include_type_summary_and_nested() {
        let m = manifest();
        let recs = records();
        let found = own_records(&m.types[0], &recs);
        assert_eq!(
            names(&found),
            vec![
                "Geo.Shape",
                "Geo.Shape.Id",
                "Geo.Shape.Outline",
                "Geo.Shape.Outline.Width",
                "Geo.ShapeSet.Items"
            ]
        );
    }

    #[test]
    fn own_records_of_nested_type() {
        let m = manifest();
        let recs = records();
        let found = own_records(&m.types[3], &recs);
        assert_eq!(
            names(&found),
            vec!["Geo.Shape.Outline", "Geo.Shape.Outline.Width"]
        );
    }

    #[test]
    fn derived_type_collects_ancestor_records() {
        let m = manifest();
        let recs = records();
        let qualifying: Vec<&TypeInfo> = m.types.iter().collect();
        let found = records_for(&m, &qualifying, &m.types[2], &recs);
        let found = names(&found);
        assert_eq!(found[0], "Geo.Ring.Inner");
        assert!(found.contains(&"Geo.Circle.Radius".to_string()));
        assert!(found.contains(&"Geo.Shape.Id".to_string()));
        assert!(found.contains(&"Geo.ShapeSet.Items".to_string()));
    }

    #[test]
    fn ancestors_outside_qualifying_set_are_ignored() {
        let m = manifest();
        let recs = records();
        let qualifying: Vec<&TypeInfo> = vec![&m.types[1]];
        let found = names(&records_for(&m, &qualifying, &m.types[1], &recs));
        assert_eq!(found, vec!["Geo.Circle", "Geo.Circle.Radius"]);
    }
}
