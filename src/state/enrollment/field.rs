//! Enrollment field catalogue and value objects

use super::step::Step;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised when writing into the enrollment form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{key}` expects a {expected} value")]
    KindMismatch { key: FieldKey, expected: FieldKind },
    #[error("`{0}` is not a valid score")]
    InvalidScore(String),
    #[error("file `{path}` cannot be attached: {reason}")]
    FileUnavailable { path: String, reason: String },
}

/// Every field of the enrollment form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    FullName,
    Nik,
    BirthPlaceDate,
    Gender,
    Address,
    Religion,
    Phone,
    PreviousSchool,
    Nisn,
    Major,
    ExamScore,
    Achievements,
    FatherName,
    MotherName,
    FatherOccupation,
    MotherOccupation,
    GuardianPhone,
    GuardianEmail,
    BirthCertificate,
    FamilyCard,
    Diploma,
    Photo,
    Consent,
}

/// Which choice list a choice field draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSet {
    Gender,
    Religion,
    Major,
}

/// Shape of the value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Choice(ChoiceSet),
    Score,
    Flag,
    File,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text | Self::Multiline => "text",
            Self::Choice(ChoiceSet::Gender) => "gender",
            Self::Choice(ChoiceSet::Religion) => "religion",
            Self::Choice(ChoiceSet::Major) => "major",
            Self::Score => "score",
            Self::Flag => "flag",
            Self::File => "file",
        };
        f.write_str(name)
    }
}

/// Static description of a field
#[derive(Debug)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Key used on the wire by the registration API
    pub wire: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub step: Step,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

const FIELDS: [FieldSpec; 23] = [
    FieldSpec {
        key: FieldKey::FullName,
        wire: "nama",
        label: "Nama Lengkap",
        kind: FieldKind::Text,
        step: Step::StudentData,
        required: true,
        placeholder: Some("Sesuai akta kelahiran"),
    },
    FieldSpec {
        key: FieldKey::Nik,
        wire: "nik",
        label: "NIK",
        kind: FieldKind::Text,
        step: Step::StudentData,
        required: true,
        placeholder: Some("16 digit NIK"),
    },
    FieldSpec {
        key: FieldKey::BirthPlaceDate,
        wire: "ttl",
        label: "Tempat, Tanggal Lahir",
        kind: FieldKind::Text,
        step: Step::StudentData,
        required: true,
        placeholder: Some("Jakarta, 01-01-2010"),
    },
    FieldSpec {
        key: FieldKey::Gender,
        wire: "jenisKelamin",
        label: "Jenis Kelamin",
        kind: FieldKind::Choice(ChoiceSet::Gender),
        step: Step::StudentData,
        required: true,
        placeholder: Some("Pilih jenis kelamin"),
    },
    FieldSpec {
        key: FieldKey::Address,
        wire: "alamat",
        label: "Alamat Lengkap",
        kind: FieldKind::Multiline,
        step: Step::StudentData,
        required: true,
        placeholder: Some("Alamat sesuai KK"),
    },
    FieldSpec {
        key: FieldKey::Religion,
        wire: "agama",
        label: "Agama",
        kind: FieldKind::Choice(ChoiceSet::Religion),
        step: Step::StudentData,
        required: true,
        placeholder: Some("Pilih agama"),
    },
    FieldSpec {
        key: FieldKey::Phone,
        wire: "telp",
        label: "Nomor Telepon / HP",
        kind: FieldKind::Text,
        step: Step::StudentData,
        required: true,
        placeholder: Some("08xxxxxxxxxx"),
    },
    FieldSpec {
        key: FieldKey::PreviousSchool,
        wire: "asalSekolah",
        label: "Asal Sekolah",
        kind: FieldKind::Text,
        step: Step::AcademicData,
        required: true,
        placeholder: Some("Nama SMP asal"),
    },
    FieldSpec {
        key: FieldKey::Nisn,
        wire: "nisn",
        label: "NISN",
        kind: FieldKind::Text,
        step: Step::AcademicData,
        required: true,
        placeholder: Some("10 digit NISN"),
    },
    FieldSpec {
        key: FieldKey::Major,
        wire: "jurusan",
        label: "Pilihan Jurusan",
        kind: FieldKind::Choice(ChoiceSet::Major),
        step: Step::AcademicData,
        required: true,
        placeholder: Some("Pilih jurusan"),
    },
    FieldSpec {
        key: FieldKey::ExamScore,
        wire: "nilaiUN",
        label: "Nilai Rata-rata UN",
        kind: FieldKind::Score,
        step: Step::AcademicData,
        required: true,
        placeholder: Some("Contoh: 85.5"),
    },
    FieldSpec {
        key: FieldKey::Achievements,
        wire: "prestasi",
        label: "Prestasi",
        kind: FieldKind::Multiline,
        step: Step::AcademicData,
        required: false,
        placeholder: Some("Tuliskan prestasi akademik / non-akademik yang pernah diraih"),
    },
    FieldSpec {
        key: FieldKey::FatherName,
        wire: "namaAyah",
        label: "Nama Ayah",
        kind: FieldKind::Text,
        step: Step::ParentsData,
        required: true,
        placeholder: Some("Nama lengkap ayah"),
    },
    FieldSpec {
        key: FieldKey::MotherName,
        wire: "namaIbu",
        label: "Nama Ibu",
        kind: FieldKind::Text,
        step: Step::ParentsData,
        required: true,
        placeholder: Some("Nama lengkap ibu"),
    },
    FieldSpec {
        key: FieldKey::FatherOccupation,
        wire: "pekerjaanAyah",
        label: "Pekerjaan Ayah",
        kind: FieldKind::Text,
        step: Step::ParentsData,
        required: false,
        placeholder: Some("Pekerjaan"),
    },
    FieldSpec {
        key: FieldKey::MotherOccupation,
        wire: "pekerjaanIbu",
        label: "Pekerjaan Ibu",
        kind: FieldKind::Text,
        step: Step::ParentsData,
        required: false,
        placeholder: Some("Pekerjaan"),
    },
    FieldSpec {
        key: FieldKey::GuardianPhone,
        wire: "telpOrtu",
        label: "No. Telepon Orang Tua",
        kind: FieldKind::Text,
        step: Step::ParentsData,
        required: true,
        placeholder: Some("08xxxxxxxxxx"),
    },
    FieldSpec {
        key: FieldKey::GuardianEmail,
        wire: "emailOrtu",
        label: "Email Orang Tua",
        kind: FieldKind::Text,
        step: Step::ParentsData,
        required: false,
        placeholder: Some("email@example.com"),
    },
    FieldSpec {
        key: FieldKey::BirthCertificate,
        wire: "aktaKelahiran",
        label: "Akta Kelahiran",
        kind: FieldKind::File,
        step: Step::Documents,
        required: true,
        placeholder: Some("Format: PDF, JPG, PNG (maks. 2MB)"),
    },
    FieldSpec {
        key: FieldKey::FamilyCard,
        wire: "kartuKeluarga",
        label: "Kartu Keluarga",
        kind: FieldKind::File,
        step: Step::Documents,
        required: true,
        placeholder: Some("Format: PDF, JPG, PNG (maks. 2MB)"),
    },
    FieldSpec {
        key: FieldKey::Diploma,
        wire: "ijazahSMP",
        label: "Ijazah SMP",
        kind: FieldKind::File,
        step: Step::Documents,
        required: true,
        placeholder: Some("Format: PDF, JPG, PNG (maks. 2MB)"),
    },
    FieldSpec {
        key: FieldKey::Photo,
        wire: "pasFoto",
        label: "Pas Foto 3x4",
        kind: FieldKind::File,
        step: Step::Documents,
        required: true,
        placeholder: Some("Format: JPG, PNG (maks. 1MB)"),
    },
    FieldSpec {
        key: FieldKey::Consent,
        wire: "persetujuan",
        label: "Pernyataan Kebenaran Data",
        kind: FieldKind::Flag,
        step: Step::Documents,
        required: true,
        placeholder: None,
    },
];

impl FieldKey {
    pub const ALL: [FieldKey; 23] = [
        Self::FullName,
        Self::Nik,
        Self::BirthPlaceDate,
        Self::Gender,
        Self::Address,
        Self::Religion,
        Self::Phone,
        Self::PreviousSchool,
        Self::Nisn,
        Self::Major,
        Self::ExamScore,
        Self::Achievements,
        Self::FatherName,
        Self::MotherName,
        Self::FatherOccupation,
        Self::MotherOccupation,
        Self::GuardianPhone,
        Self::GuardianEmail,
        Self::BirthCertificate,
        Self::FamilyCard,
        Self::Diploma,
        Self::Photo,
        Self::Consent,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.spec().wire
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }

    pub fn step(self) -> Step {
        self.spec().step
    }

    pub fn is_required(self) -> bool {
        self.spec().required
    }

    /// Input hint shown under the focused field
    pub fn placeholder(self) -> Option<&'static str> {
        self.spec().placeholder
    }

    /// Fields belonging to a step, in display order
    pub fn for_step(step: Step) -> impl Iterator<Item = FieldKey> {
        Self::ALL.into_iter().filter(move |key| key.step() == step)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A fixed option list backing a select-style field
pub trait Choice: Sized + Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn code(self) -> &'static str;
    fn label(self) -> &'static str;

    /// Step through `[unset, first, .., last]`, wrapping at both ends
    fn cycle(current: Option<Self>, forward: bool) -> Option<Self> {
        let slots = Self::ALL.len() + 1;
        let position = current
            .and_then(|c| Self::ALL.iter().position(|o| *o == c))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (position + 1) % slots
        } else {
            (position + slots - 1) % slots
        };
        next.checked_sub(1).map(|i| Self::ALL[i])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn code(self) -> &'static str {
        match self {
            Self::Male => "L",
            Self::Female => "P",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Male => "Laki-laki",
            Self::Female => "Perempuan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Religion {
    Islam,
    Kristen,
    Katolik,
    Hindu,
    Buddha,
    Konghucu,
}

impl Choice for Religion {
    const ALL: &'static [Self] = &[
        Self::Islam,
        Self::Kristen,
        Self::Katolik,
        Self::Hindu,
        Self::Buddha,
        Self::Konghucu,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Islam => "islam",
            Self::Kristen => "kristen",
            Self::Katolik => "katolik",
            Self::Hindu => "hindu",
            Self::Buddha => "buddha",
            Self::Konghucu => "konghucu",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Islam => "Islam",
            Self::Kristen => "Kristen",
            Self::Katolik => "Katolik",
            Self::Hindu => "Hindu",
            Self::Buddha => "Buddha",
            Self::Konghucu => "Konghucu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Major {
    Ipa,
    Ips,
}

impl Choice for Major {
    const ALL: &'static [Self] = &[Self::Ipa, Self::Ips];

    fn code(self) -> &'static str {
        match self {
            Self::Ipa => "ipa",
            Self::Ips => "ips",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Ipa => "IPA (Matematika & IPA)",
            Self::Ips => "IPS (Ilmu Sosial)",
        }
    }
}

/// Reference to a document picked from the local filesystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            size,
        }
    }

    /// Resolve a path typed by the user into a reference to an existing file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();
        let unavailable = |reason: String| FormError::FileUnavailable {
            path: path.display().to_string(),
            reason,
        };
        let metadata = std::fs::metadata(path).map_err(|e| unavailable(e.to_string()))?;
        if !metadata.is_file() {
            return Err(unavailable("not a regular file".to_string()));
        }
        Ok(Self::new(path, metadata.len()))
    }

    /// Human readable size, e.g. `1.4 MB`
    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        match self.size {
            s if s >= MB => format!("{:.1} MB", s as f64 / MB as f64),
            s if s >= KB => format!("{:.1} KB", s as f64 / KB as f64),
            s => format!("{s} B"),
        }
    }
}

/// A value written into a single field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Gender(Option<Gender>),
    Religion(Option<Religion>),
    Major(Option<Major>),
    Flag(bool),
    File(Option<FileRef>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Next option of a choice, or the flipped flag. Other values are returned as is.
    pub fn cycled(self, forward: bool) -> Self {
        match self {
            Self::Gender(current) => Self::Gender(Gender::cycle(current, forward)),
            Self::Religion(current) => Self::Religion(Religion::cycle(current, forward)),
            Self::Major(current) => Self::Major(Major::cycle(current, forward)),
            Self::Flag(on) => Self::Flag(!on),
            other => other,
        }
    }
}

/// Accepts partial numeric input such as `""`, `"85"`, `"85."` or `"85.5"`
pub fn is_score_input(value: &str) -> bool {
    let mut seen_dot = false;
    value.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}
