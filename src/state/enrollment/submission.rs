//! Submission payload, receipt and failure types

use super::field::{Choice, FieldKey, FileRef};
use super::form::EnrollmentForm;
use super::validation::FieldError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// One uploaded document, sent as a multipart part
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentPart {
    pub field: FieldKey,
    pub file_name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl DocumentPart {
    fn new(field: FieldKey, file: &FileRef) -> Self {
        Self {
            field,
            file_name: file.file_name.clone(),
            path: file.path.clone(),
            size: file.size,
        }
    }
}

/// Wire shape of a registration, keyed like the web registration form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPayload {
    pub nama: String,
    pub nik: String,
    pub ttl: String,
    pub jenis_kelamin: Option<&'static str>,
    pub alamat: String,
    pub agama: Option<&'static str>,
    pub telp: String,
    pub asal_sekolah: String,
    pub nisn: String,
    pub jurusan: Option<&'static str>,
    #[serde(rename = "nilaiUN")]
    pub nilai_un: Option<f32>,
    pub prestasi: String,
    pub nama_ayah: String,
    pub nama_ibu: String,
    pub pekerjaan_ayah: String,
    pub pekerjaan_ibu: String,
    pub telp_ortu: String,
    pub email_ortu: String,
    pub persetujuan: bool,
    pub documents: Vec<DocumentPart>,
}

impl EnrollmentPayload {
    pub fn from_form(form: &EnrollmentForm) -> Self {
        let documents = [
            FieldKey::BirthCertificate,
            FieldKey::FamilyCard,
            FieldKey::Diploma,
            FieldKey::Photo,
        ]
        .into_iter()
        .filter_map(|key| form.file(key).map(|file| DocumentPart::new(key, file)))
        .collect();

        Self {
            nama: form.full_name.trim().to_string(),
            nik: form.nik.trim().to_string(),
            ttl: form.birth_place_date.trim().to_string(),
            jenis_kelamin: form.gender.map(Choice::code),
            alamat: form.address.trim().to_string(),
            agama: form.religion.map(Choice::code),
            telp: form.phone.trim().to_string(),
            asal_sekolah: form.previous_school.trim().to_string(),
            nisn: form.nisn.trim().to_string(),
            jurusan: form.major.map(Choice::code),
            nilai_un: form.score(),
            prestasi: form.achievements.trim().to_string(),
            nama_ayah: form.father_name.trim().to_string(),
            nama_ibu: form.mother_name.trim().to_string(),
            pekerjaan_ayah: form.father_occupation.trim().to_string(),
            pekerjaan_ibu: form.mother_occupation.trim().to_string(),
            telp_ortu: form.guardian_phone.trim().to_string(),
            email_ortu: form.guardian_email.trim().to_string(),
            persetujuan: form.consent,
            documents,
        }
    }
}

/// Acknowledgement of an accepted registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            reference_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// Short code shown to the applicant, e.g. `PPDB-3F2A9C1B`
    pub fn short_code(&self) -> String {
        let simple = self.reference_id.simple().to_string();
        format!("PPDB-{}", simple[..8].to_uppercase())
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a registration was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Pendaftaran ditolak: {} data perlu diperbaiki", .0.len())]
    Rejected(Vec<FieldError>),
    #[error("Layanan pendaftaran tidak tersedia: {0}")]
    Unavailable(String),
}
