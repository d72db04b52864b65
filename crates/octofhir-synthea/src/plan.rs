//! Upload ordering for a single directory.
//!
//! Synthea patient bundles reference the Organization, Location and
//! Practitioner resources from the hospital and practitioner bundles, so
//! those two go first. Each directory is planned on its own.

use crate::classify::BundleKind;

/// One scheduled upload: the pass that sends it and the file it sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedUpload<'a> {
    pub pass: BundleKind,
    /// Position of the file in the list given to [`upload_order`].
    pub index: usize,
    pub file_name: &'a str,
}

/// Order a directory's files into hospital, practitioner and patient passes.
///
/// The hospital and practitioner passes each pick the first file (in listing
/// order) carrying their marker, or nothing when there is none. The patient
/// pass sends every file the first two passes did not pick, in listing order,
/// which includes any surplus hospital or practitioner bundle.
pub fn upload_order<S: AsRef<str>>(files: &[S]) -> Vec<PlannedUpload<'_>> {
    let names: Vec<&str> = files.iter().map(AsRef::as_ref).collect();

    let hospital = first_match(&names, BundleKind::Hospital);
    let practitioner = first_match(&names, BundleKind::Practitioner);

    let mut order = Vec::with_capacity(names.len());
    for (pass, picked) in [
        (BundleKind::Hospital, hospital),
        (BundleKind::Practitioner, practitioner),
    ] {
        if let Some(idx) = picked {
            order.push(PlannedUpload {
                pass,
                index: idx,
                file_name: names[idx],
            });
        }
    }

    for (idx, name) in names.iter().copied().enumerate() {
        if Some(idx) == hospital || Some(idx) == practitioner {
            continue;
        }
        order.push(PlannedUpload {
            pass: BundleKind::Patient,
            index: idx,
            file_name: name,
        });
    }

    order
}

fn first_match(names: &[&str], kind: BundleKind) -> Option<usize> {
    names.iter().position(|name| kind.matches(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(plan: &[PlannedUpload<'a>]) -> Vec<&'a str> {
        plan.iter().map(|p| p.file_name).collect()
    }

    #[test]
    fn hospital_then_practitioner_then_patients() {
        let files = [
            "patientA.json",
            "practitionerInformation1.json",
            "patientB.json",
            "hospitalInformation1.json",
        ];
        let plan = upload_order(&files);
        assert_eq!(
            names(&plan),
            vec![
                "hospitalInformation1.json",
                "practitionerInformation1.json",
                "patientA.json",
                "patientB.json",
            ]
        );
        assert_eq!(
            plan.iter().map(|p| p.pass).collect::<Vec<_>>(),
            vec![
                BundleKind::Hospital,
                BundleKind::Practitioner,
                BundleKind::Patient,
                BundleKind::Patient,
            ]
        );
    }

    #[test]
    fn missing_categories_are_skipped() {
        let files = ["patientA.json", "patientB.json"];
        let plan = upload_order(&files);
        assert_eq!(names(&plan), vec!["patientA.json", "patientB.json"]);
        assert!(plan.iter().all(|p| p.pass == BundleKind::Patient));
    }

    #[test]
    fn empty_directory_plans_nothing() {
        let files: [&str; 0] = [];
        assert!(upload_order(&files).is_empty());
    }

    #[test]
    fn surplus_hospital_falls_through_to_patient_pass() {
        let files = [
            "hospitalInformation1.json",
            "patientA.json",
            "hospitalInformation2.json",
            "practitionerInformation1.json",
        ];
        let plan = upload_order(&files);
        assert_eq!(
            plan,
            vec![
                PlannedUpload {
                    pass: BundleKind::Hospital,
                    index: 0,
                    file_name: "hospitalInformation1.json"
                },
                PlannedUpload {
                    pass: BundleKind::Practitioner,
                    index: 3,
                    file_name: "practitionerInformation1.json"
                },
                PlannedUpload {
                    pass: BundleKind::Patient,
                    index: 1,
                    file_name: "patientA.json"
                },
                PlannedUpload {
                    pass: BundleKind::Patient,
                    index: 2,
                    file_name: "hospitalInformation2.json"
                },
            ]
        );
    }

    #[test]
    fn surplus_practitioner_falls_through_to_patient_pass() {
        let files = [
            "practitionerInformation1.json",
            "practitionerInformation2.json",
        ];
        let plan = upload_order(&files);
        assert_eq!(
            names(&plan),
            vec![
                "practitionerInformation1.json",
                "practitionerInformation2.json"
            ]
        );
        assert_eq!(plan[1].pass, BundleKind::Patient);
    }

    #[test]
    fn file_with_both_markers_is_picked_by_both_passes() {
        let files = [
            "hospitalInformation_practitionerInformation.json",
            "patientA.json",
        ];
        let plan = upload_order(&files);
        assert_eq!(
            names(&plan),
            vec![
                "hospitalInformation_practitionerInformation.json",
                "hospitalInformation_practitionerInformation.json",
                "patientA.json",
            ]
        );
    }

    #[test]
    fn category_files_never_follow_a_patient() {
        let files = vec![
            "z.json".to_string(),
            "y.json".to_string(),
            "practitionerInformation9.json".to_string(),
            "hospitalInformation9.json".to_string(),
        ];
        let plan = upload_order(&files);
        let first_patient = plan
            .iter()
            .position(|p| p.pass == BundleKind::Patient)
            .unwrap();
        assert!(
            plan[first_patient..]
                .iter()
                .all(|p| p.pass == BundleKind::Patient)
        );
        assert_eq!(first_patient, 2);
    }
}
