//! Pending wizard transitions and the copy of the dialog confirming them

use super::step::Step;

/// What a pending confirmation will do when accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Advance,
    Retreat,
    Submit,
}

struct KindCopy {
    title: &'static str,
    message: &'static str,
    confirm_label: &'static str,
}

const KIND_COPY: [KindCopy; 3] = [
    KindCopy {
        title: "Lanjut ke Langkah Berikutnya",
        message: "Apakah Anda yakin ingin melanjutkan ke langkah berikutnya? Pastikan data yang Anda isi sudah benar.",
        confirm_label: "Ya, Lanjutkan",
    },
    KindCopy {
        title: "Kembali ke Langkah Sebelumnya",
        message: "Apakah Anda yakin ingin kembali ke langkah sebelumnya? Data yang belum disimpan mungkin akan hilang.",
        confirm_label: "Ya, Lanjutkan",
    },
    KindCopy {
        title: "Kirim Pendaftaran",
        message: "Apakah Anda yakin ingin mengirimkan formulir pendaftaran ini? Pastikan semua data dan dokumen sudah lengkap dan benar.",
        confirm_label: "Ya, Kirim",
    },
];

impl TransitionKind {
    fn copy(self) -> &'static KindCopy {
        &KIND_COPY[self as usize]
    }
}

/// A transition waiting for the user to confirm or cancel it.
///
/// Advance and retreat carry their target step; submit has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    kind: TransitionKind,
    from: Step,
    target: Option<Step>,
    loading: bool,
}

impl PendingTransition {
    pub fn advance(from: Step) -> Option<Self> {
        from.next().map(|to| Self::new(TransitionKind::Advance, from, Some(to)))
    }

    pub fn retreat(from: Step) -> Option<Self> {
        from.prev().map(|to| Self::new(TransitionKind::Retreat, from, Some(to)))
    }

    pub fn submit(from: Step) -> Option<Self> {
        from.is_last()
            .then(|| Self::new(TransitionKind::Submit, from, None))
    }

    fn new(kind: TransitionKind, from: Step, target: Option<Step>) -> Self {
        Self {
            kind,
            from,
            target,
            loading: false,
        }
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn origin(&self) -> Step {
        self.from
    }

    pub fn target(&self) -> Option<Step> {
        self.target
    }

    /// While loading both dialog actions are disabled
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(super) fn start_loading(&mut self) {
        self.loading = true;
    }
}

/// Everything the confirmation dialog renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogCopy {
    pub title: &'static str,
    pub message: &'static str,
    pub step_title: &'static str,
    pub step_caption: String,
    pub step_question: &'static str,
    pub note: &'static str,
    /// Shown only before the irreversible final submission
    pub warning: Option<&'static str>,
    /// Shown only when the data can still be corrected later
    pub footer: Option<&'static str>,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
    pub loading: bool,
}

impl DialogCopy {
    pub fn for_transition(pending: &PendingTransition) -> Self {
        let kind = pending.kind().copy();
        let step = pending.origin().descriptor();
        let is_final = pending.origin().is_last();

        Self {
            title: kind.title,
            message: kind.message,
            step_title: step.confirm_title,
            step_caption: format!("Step {} dari {}", step.ordinal, Step::COUNT),
            step_question: step.confirm_message,
            note: step.confirm_note,
            warning: is_final.then_some("Setelah dikirim, data tidak dapat diubah"),
            footer: (!is_final).then_some("Masih bisa diperbaiki di step berikutnya"),
            confirm_label: if pending.is_loading() {
                "Mengirim..."
            } else {
                kind.confirm_label
            },
            cancel_label: "Batal",
            loading: pending.is_loading(),
        }
    }
}
