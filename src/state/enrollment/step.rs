//! Wizard steps and their static descriptors

/// One page of the enrollment wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    StudentData,
    AcademicData,
    ParentsData,
    Documents,
}

/// Display data for a step, including the copy of its confirmation dialog
#[derive(Debug)]
pub struct StepDescriptor {
    pub ordinal: u8,
    pub label: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub confirm_title: &'static str,
    pub confirm_message: &'static str,
    pub confirm_note: &'static str,
}

const STEPS: [StepDescriptor; 4] = [
    StepDescriptor {
        ordinal: 1,
        label: "Data Diri",
        title: "Data Diri Calon Siswa",
        icon: "◉",
        confirm_title: "Konfirmasi Data Diri",
        confirm_message: "Apakah data diri calon siswa sudah benar?",
        confirm_note: "Pastikan nama, NIK, dan data pribadi sesuai dokumen.",
    },
    StepDescriptor {
        ordinal: 2,
        label: "Akademik",
        title: "Data Akademik",
        icon: "✎",
        confirm_title: "Konfirmasi Data Akademik",
        confirm_message: "Apakah data akademik sudah benar?",
        confirm_note: "Pastikan NISN dan nilai sesuai dengan dokumen asli.",
    },
    StepDescriptor {
        ordinal: 3,
        label: "Wali",
        title: "Data Orang Tua / Wali",
        icon: "☎",
        confirm_title: "Konfirmasi Data Wali",
        confirm_message: "Apakah data orang tua/wali sudah benar?",
        confirm_note: "Pastikan kontak orang tua dapat dihubungi.",
    },
    StepDescriptor {
        ordinal: 4,
        label: "Dokumen",
        title: "Upload Dokumen",
        icon: "▤",
        confirm_title: "Konfirmasi Final",
        confirm_message: "Apakah semua data sudah benar?",
        confirm_note: "Data yang sudah dikirim tidak dapat diubah.",
    },
];

impl Step {
    pub const ALL: [Step; 4] = [
        Self::StudentData,
        Self::AcademicData,
        Self::ParentsData,
        Self::Documents,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn descriptor(self) -> &'static StepDescriptor {
        &STEPS[self.index()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based position of the step
    pub fn ordinal(self) -> u8 {
        self.descriptor().ordinal
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_first(self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// Fraction of the progress bar filled when `current` (1-based) of `total` steps is active.
///
/// A wizard with a single step is always complete.
pub fn progress_fraction(current: u8, total: usize) -> f64 {
    if total <= 1 {
        return 1.0;
    }
    let done = f64::from(current) - 1.0;
    (done / (total as f64 - 1.0)).clamp(0.0, 1.0)
}

/// Caption shown under the step indicator
pub fn progress_caption(current: Step) -> String {
    if current.is_last() {
        "Siap untuk mengirimkan pendaftaran!".to_string()
    } else {
        format!(
            "Langkah {} dari {}: {}",
            current.ordinal(),
            Step::COUNT,
            current.descriptor().label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod step {
        use super::*;

        #[test]
        fn test_descriptor_ordinals_follow_order() {
            for (i, step) in Step::ALL.into_iter().enumerate() {
                assert_eq!(step.ordinal() as usize, i + 1);
                assert_eq!(Step::ALL[step.index()], step);
            }
        }

        #[test]
        fn test_next_and_prev_edges() {
            assert_eq!(Step::StudentData.prev(), None);
            assert_eq!(Step::StudentData.next(), Some(Step::AcademicData));
            assert_eq!(Step::Documents.next(), None);
            assert_eq!(Step::Documents.prev(), Some(Step::ParentsData));
            assert!(Step::StudentData.is_first());
            assert!(Step::Documents.is_last());
        }

        #[test]
        fn test_default_is_first_step() {
            assert_eq!(Step::default(), Step::StudentData);
        }
    }

    mod progress {
        use super::*;

        #[test]
        fn test_fraction_per_step() {
            assert_eq!(progress_fraction(1, 4), 0.0);
            assert!((progress_fraction(2, 4) - 1.0 / 3.0).abs() < f64::EPSILON);
            assert_eq!(progress_fraction(4, 4), 1.0);
        }

        #[test]
        fn test_fraction_is_clamped() {
            assert_eq!(progress_fraction(0, 4), 0.0);
            assert_eq!(progress_fraction(9, 4), 1.0);
        }

        #[test]
        fn test_single_step_is_complete() {
            assert_eq!(progress_fraction(1, 1), 1.0);
            assert_eq!(progress_fraction(1, 0), 1.0);
        }

        #[test]
        fn test_caption() {
            assert_eq!(
                progress_caption(Step::AcademicData),
                "Langkah 2 dari 4: Akademik"
            );
            assert_eq!(
                progress_caption(Step::Documents),
                "Siap untuk mengirimkan pendaftaran!"
            );
        }
    }
}
