//! The enrollment record shared by every wizard step

use super::field::{
    is_score_input, Choice, ChoiceSet, FieldKey, FieldKind, FieldValue, FileRef, FormError,
    Gender, Major, Religion,
};

/// Every field of the enrollment form in one flat record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentForm {
    // Step 1
    pub full_name: String,
    pub nik: String,
    pub birth_place_date: String,
    pub gender: Option<Gender>,
    pub address: String,
    pub religion: Option<Religion>,
    pub phone: String,

    // Step 2
    pub previous_school: String,
    pub nisn: String,
    pub major: Option<Major>,
    pub exam_score: String,
    pub achievements: String,

    // Step 3
    pub father_name: String,
    pub mother_name: String,
    pub father_occupation: String,
    pub mother_occupation: String,
    pub guardian_phone: String,
    pub guardian_email: String,

    // Step 4
    pub birth_certificate: Option<FileRef>,
    pub family_card: Option<FileRef>,
    pub diploma: Option<FileRef>,
    pub photo: Option<FileRef>,
    pub consent: bool,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a single field into the record. The last write for a key wins.
    ///
    /// A value of the wrong kind leaves the record untouched.
    pub fn set(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FormError> {
        let mismatch = || FormError::KindMismatch {
            key,
            expected: key.kind(),
        };

        match (key.kind(), value) {
            (FieldKind::Score, FieldValue::Text(text)) => {
                if !is_score_input(&text) {
                    return Err(FormError::InvalidScore(text));
                }
                self.exam_score = text;
            }
            (FieldKind::Text | FieldKind::Multiline, FieldValue::Text(text)) => {
                *self.text_slot_mut(key).ok_or_else(mismatch)? = text;
            }
            (FieldKind::Choice(ChoiceSet::Gender), FieldValue::Gender(gender)) => {
                self.gender = gender;
            }
            (FieldKind::Choice(ChoiceSet::Religion), FieldValue::Religion(religion)) => {
                self.religion = religion;
            }
            (FieldKind::Choice(ChoiceSet::Major), FieldValue::Major(major)) => {
                self.major = major;
            }
            (FieldKind::Flag, FieldValue::Flag(flag)) => self.consent = flag,
            (FieldKind::File, FieldValue::File(file)) => {
                *self.file_slot_mut(key).ok_or_else(mismatch)? = file;
            }
            _ => return Err(mismatch()),
        }
        Ok(())
    }

    /// Current value of a field
    pub fn get(&self, key: FieldKey) -> FieldValue {
        match key.kind() {
            FieldKind::Text | FieldKind::Multiline | FieldKind::Score => {
                FieldValue::Text(self.text(key).unwrap_or_default().to_string())
            }
            FieldKind::Choice(ChoiceSet::Gender) => FieldValue::Gender(self.gender),
            FieldKind::Choice(ChoiceSet::Religion) => FieldValue::Religion(self.religion),
            FieldKind::Choice(ChoiceSet::Major) => FieldValue::Major(self.major),
            FieldKind::Flag => FieldValue::Flag(self.consent),
            FieldKind::File => FieldValue::File(self.file(key).cloned()),
        }
    }

    /// Text content of a text, multiline or score field
    pub fn text(&self, key: FieldKey) -> Option<&str> {
        let text = match key {
            FieldKey::FullName => &self.full_name,
            FieldKey::Nik => &self.nik,
            FieldKey::BirthPlaceDate => &self.birth_place_date,
            FieldKey::Address => &self.address,
            FieldKey::Phone => &self.phone,
            FieldKey::PreviousSchool => &self.previous_school,
            FieldKey::Nisn => &self.nisn,
            FieldKey::ExamScore => &self.exam_score,
            FieldKey::Achievements => &self.achievements,
            FieldKey::FatherName => &self.father_name,
            FieldKey::MotherName => &self.mother_name,
            FieldKey::FatherOccupation => &self.father_occupation,
            FieldKey::MotherOccupation => &self.mother_occupation,
            FieldKey::GuardianPhone => &self.guardian_phone,
            FieldKey::GuardianEmail => &self.guardian_email,
            _ => return None,
        };
        Some(text)
    }

    fn text_slot_mut(&mut self, key: FieldKey) -> Option<&mut String> {
        let slot = match key {
            FieldKey::FullName => &mut self.full_name,
            FieldKey::Nik => &mut self.nik,
            FieldKey::BirthPlaceDate => &mut self.birth_place_date,
            FieldKey::Address => &mut self.address,
            FieldKey::Phone => &mut self.phone,
            FieldKey::PreviousSchool => &mut self.previous_school,
            FieldKey::Nisn => &mut self.nisn,
            FieldKey::Achievements => &mut self.achievements,
            FieldKey::FatherName => &mut self.father_name,
            FieldKey::MotherName => &mut self.mother_name,
            FieldKey::FatherOccupation => &mut self.father_occupation,
            FieldKey::MotherOccupation => &mut self.mother_occupation,
            FieldKey::GuardianPhone => &mut self.guardian_phone,
            FieldKey::GuardianEmail => &mut self.guardian_email,
            _ => return None,
        };
        Some(slot)
    }

    /// Attached document for a file field
    pub fn file(&self, key: FieldKey) -> Option<&FileRef> {
        match key {
            FieldKey::BirthCertificate => self.birth_certificate.as_ref(),
            FieldKey::FamilyCard => self.family_card.as_ref(),
            FieldKey::Diploma => self.diploma.as_ref(),
            FieldKey::Photo => self.photo.as_ref(),
            _ => None,
        }
    }

    fn file_slot_mut(&mut self, key: FieldKey) -> Option<&mut Option<FileRef>> {
        match key {
            FieldKey::BirthCertificate => Some(&mut self.birth_certificate),
            FieldKey::FamilyCard => Some(&mut self.family_card),
            FieldKey::Diploma => Some(&mut self.diploma),
            FieldKey::Photo => Some(&mut self.photo),
            _ => None,
        }
    }

    /// Whether the field holds anything at all
    pub fn is_filled(&self, key: FieldKey) -> bool {
        match key.kind() {
            FieldKind::Text | FieldKind::Multiline | FieldKind::Score => self
                .text(key)
                .is_some_and(|text| !text.trim().is_empty()),
            FieldKind::Choice(ChoiceSet::Gender) => self.gender.is_some(),
            FieldKind::Choice(ChoiceSet::Religion) => self.religion.is_some(),
            FieldKind::Choice(ChoiceSet::Major) => self.major.is_some(),
            FieldKind::Flag => self.consent,
            FieldKind::File => self.file(key).is_some(),
        }
    }

    /// Parsed exam score, if the input is a complete number
    pub fn score(&self) -> Option<f32> {
        self.exam_score.trim().parse().ok()
    }

    /// Value rendered in the field box
    pub fn display_value(&self, key: FieldKey) -> String {
        fn choice_label<C: Choice>(choice: Option<C>) -> String {
            choice.map(|c| c.label().to_string()).unwrap_or_default()
        }

        match key.kind() {
            FieldKind::Text | FieldKind::Multiline | FieldKind::Score => {
                self.text(key).unwrap_or_default().to_string()
            }
            FieldKind::Choice(ChoiceSet::Gender) => choice_label(self.gender),
            FieldKind::Choice(ChoiceSet::Religion) => choice_label(self.religion),
            FieldKind::Choice(ChoiceSet::Major) => choice_label(self.major),
            FieldKind::Flag => (if self.consent { "[x]" } else { "[ ]" }).to_string(),
            FieldKind::File => self
                .file(key)
                .map(|f| format!("{} ({})", f.file_name, f.size_label()))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod set {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_last_write_wins() {
            let mut form = EnrollmentForm::new();
            form.set(FieldKey::FullName, FieldValue::text("A")).unwrap();
            form.set(FieldKey::FullName, FieldValue::text("B")).unwrap();
            assert_eq!(form.full_name, "B");
        }

        #[test]
        fn test_editing_one_field_leaves_others() {
            let mut form = EnrollmentForm::new();
            form.set(FieldKey::Nik, FieldValue::text("1234567890123456"))
                .unwrap();
            let before = form.clone();

            form.set(FieldKey::FullName, FieldValue::text("Budi")).unwrap();

            let expected = EnrollmentForm {
                full_name: "Budi".to_string(),
                ..before
            };
            assert_eq!(form, expected);
        }

        #[test]
        fn test_every_text_field_is_writable() {
            let mut form = EnrollmentForm::new();
            for key in FieldKey::ALL {
                if matches!(key.kind(), FieldKind::Text | FieldKind::Multiline) {
                    form.set(key, FieldValue::text("x")).unwrap();
                    assert_eq!(form.text(key), Some("x"), "field {key}");
                }
            }
        }

        #[test]
        fn test_kind_mismatch_is_rejected() {
            let mut form = EnrollmentForm::new();
            let err = form
                .set(FieldKey::Consent, FieldValue::text("yes"))
                .unwrap_err();
            assert_eq!(
                err,
                FormError::KindMismatch {
                    key: FieldKey::Consent,
                    expected: FieldKind::Flag,
                }
            );
            assert_eq!(form, EnrollmentForm::new());
        }

        #[test]
        fn test_choice_of_wrong_set_is_rejected() {
            let mut form = EnrollmentForm::new();
            let result = form.set(FieldKey::Gender, FieldValue::Major(Some(Major::Ipa)));
            assert!(result.is_err());
            assert_eq!(form.gender, None);
        }

        #[test]
        fn test_invalid_score_is_rejected() {
            let mut form = EnrollmentForm::new();
            form.set(FieldKey::ExamScore, FieldValue::text("85.5"))
                .unwrap();
            let err = form
                .set(FieldKey::ExamScore, FieldValue::text("85.5x"))
                .unwrap_err();
            assert_eq!(err, FormError::InvalidScore("85.5x".to_string()));
            assert_eq!(form.exam_score, "85.5");
            assert_eq!(form.score(), Some(85.5));
        }

        #[test]
        fn test_file_and_flag() {
            let mut form = EnrollmentForm::new();
            let file = FileRef::new("/tmp/kk.pdf", 10);
            form.set(FieldKey::FamilyCard, FieldValue::File(Some(file.clone())))
                .unwrap();
            form.set(FieldKey::Consent, FieldValue::Flag(true)).unwrap();

            assert_eq!(form.family_card, Some(file));
            assert!(form.consent);
            assert!(form.birth_certificate.is_none());
        }
    }

    mod read {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_get_mirrors_set() {
            let mut form = EnrollmentForm::new();
            let value = FieldValue::Religion(Some(Religion::Hindu));
            form.set(FieldKey::Religion, value.clone()).unwrap();
            assert_eq!(form.get(FieldKey::Religion), value);
            assert_eq!(form.get(FieldKey::Phone), FieldValue::text(""));
        }

        #[test]
        fn test_is_filled_ignores_whitespace() {
            let mut form = EnrollmentForm::new();
            form.set(FieldKey::Address, FieldValue::text("   ")).unwrap();
            assert!(!form.is_filled(FieldKey::Address));
            form.set(FieldKey::Address, FieldValue::text("Jl. Merdeka 1"))
                .unwrap();
            assert!(form.is_filled(FieldKey::Address));
        }

        #[test]
        fn test_display_values() {
            let mut form = EnrollmentForm::new();
            form.set(FieldKey::Gender, FieldValue::Gender(Some(Gender::Female)))
                .unwrap();
            form.set(
                FieldKey::Photo,
                FieldValue::File(Some(FileRef::new("/tmp/foto.jpg", 512))),
            )
            .unwrap();

            assert_eq!(form.display_value(FieldKey::Gender), "Perempuan");
            assert_eq!(form.display_value(FieldKey::Photo), "foto.jpg (512 B)");
            assert_eq!(form.display_value(FieldKey::Consent), "[ ]");
            assert_eq!(form.display_value(FieldKey::Major), "");
        }
    }
}
