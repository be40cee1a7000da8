//! Embedded sample data set.
//!
//! Eight trials and ten patients, all fictional. Used by the `sample`
//! command and as a realistic fixture in tests.

use trialmatch_contracts::{MatchResult, Patient, Trial};
use trialmatch_core::traits::DataProvider;

use crate::json::DataSet;

/// A `DataProvider` serving the embedded sample data.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProvider;

impl DataProvider for FixtureProvider {
    fn patients(&self) -> MatchResult<Vec<Patient>> {
        Ok(sample_patients())
    }

    fn trials(&self) -> MatchResult<Vec<Trial>> {
        Ok(sample_trials())
    }
}

/// The sample data as one `DataSet`.
pub fn sample_dataset() -> DataSet {
    DataSet {
        trials: sample_trials(),
        patients: sample_patients(),
    }
}

// ── Trials ────────────────────────────────────────────────────────────────────

pub fn sample_trials() -> Vec<Trial> {
    vec![
        Trial::new(
            "NCT001",
            "Trial for Diabetes and Hypertension",
            "Inclusion: Patients with both diabetes and hypertension. Age between 40 and 60 years.",
            "Exclusion: Patients with a history of cardiovascular disease or on insulin therapy.",
        ),
        Trial::new(
            "NCT002",
            "Diabetes Treatment Study for Elderly Patients",
            "Inclusion: Patients diagnosed with diabetes. Age 65 and above.",
            "Exclusion: Patients with uncontrolled hypertension or severe kidney disease.",
        ),
        Trial::new(
            "NCT003",
            "Heart Disease Study for Middle-Aged Patients",
            "Inclusion: Patients with a confirmed diagnosis of heart disease. Age between 45 and 55 years.",
            "Exclusion: Patients on blood thinners, or with diabetes.",
        ),
        Trial::new(
            "NCT004",
            "Cancer Immunotherapy Study",
            "Inclusion: Patients with any type of solid tumor cancer. Age between 18 and 70 years.",
            "Exclusion: Patients who have previously undergone chemotherapy or have autoimmune disorders.",
        ),
        Trial::new(
            "NCT005",
            "Osteoporosis Study for Post-Menopausal Women",
            "Inclusion: Post-menopausal women diagnosed with osteoporosis. Age 50 and above.",
            "Exclusion: Patients on hormone replacement therapy or with a history of breast cancer.",
        ),
        Trial::new(
            "NCT006",
            "COVID-19 Vaccine Trial for Adults",
            "Inclusion: Adults aged 18 and above, with no history of COVID-19 vaccination.",
            "Exclusion: Patients with any pre-existing respiratory condition or those on immunosuppressive therapy.",
        ),
        Trial::new(
            "NCT007",
            "Asthma Study for Children",
            "Inclusion: Children diagnosed with moderate to severe asthma. Age between 6 and 17 years.",
            "Exclusion: Children with any other chronic respiratory conditions or on long-term steroid treatment.",
        ),
        Trial::new(
            "NCT008",
            "Mental Health Study for Adolescents",
            "Inclusion: Adolescents diagnosed with depression or anxiety. Age between 13 and 18 years.",
            "Exclusion: Adolescents with a history of self-harm or currently on antidepressant medications.",
        ),
    ]
}

// ── Patients ──────────────────────────────────────────────────────────────────

pub fn sample_patients() -> Vec<Patient> {
    vec![
        Patient::new("patient1", 45)
            .with_gender("Male")
            .with_conditions(["diabetes", "hypertension"])
            .with_medications(["Metformin"]),
        Patient::new("patient2", 70)
            .with_gender("Female")
            .with_conditions(["diabetes"]),
        Patient::new("patient3", 50)
            .with_gender("Male")
            .with_conditions(["heart disease", "diabetes"]),
        Patient::new("patient4", 55)
            .with_gender("Female")
            .with_conditions(["osteoporosis"])
            .with_medications(["hormone replacement therapy"]),
        Patient::new("patient5", 30)
            .with_gender("Male")
            .with_conditions(["cancer"]),
        Patient::new("patient6", 40)
            .with_gender("Female")
            .with_conditions(["covid-19"]),
        Patient::new("patient7", 12)
            .with_gender("Male")
            .with_conditions(["asthma"]),
        Patient::new("patient8", 15)
            .with_gender("Female")
            .with_conditions(["depression"]),
        Patient::new("patient9", 67)
            .with_gender("Male")
            .with_conditions(["diabetes", "kidney disease"]),
        Patient::new("patient10", 35)
            .with_gender("Female")
            .with_conditions(["hypertension"]),
    ]
}
