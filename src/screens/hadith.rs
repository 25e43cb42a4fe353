use crate::content;
use crate::models::Hadith;

/// Explanation request handed back to the shell for dispatch. `seq`
/// identifies the newest request; responses for older sequences are stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainRequest {
    pub seq: u64,
    pub arabic: String,
    pub translation: String,
}

/// Hadith browser plus the modal sharh overlay.
///
/// Overlay invariant: open iff `selected` is set; `dismiss` clears the
/// selection and the explanation in the same step, so a previous sharh can
/// never show under a new header.
pub struct HadithScreen {
    pub hadiths: Vec<Hadith>,
    pub cursor: usize,
    pub selected: Option<Hadith>,
    pub explanation: Option<String>,
    pub loading: bool,
    seq: u64,
}

impl HadithScreen {
    pub fn new() -> Self {
        Self {
            hadiths: content::hadiths(),
            cursor: 0,
            selected: None,
            explanation: None,
            loading: false,
            seq: 0,
        }
    }

    pub fn overlay_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn select_next(&mut self) {
        let max = self.hadiths.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Open the overlay for the card under the cursor and describe the
    /// request to issue. Supersedes any in-flight request.
    pub fn explain(&mut self) -> Option<ExplainRequest> {
        let hadith = self.hadiths.get(self.cursor)?.clone();
        self.seq += 1;
        self.selected = Some(hadith.clone());
        self.explanation = None;
        self.loading = true;
        Some(ExplainRequest {
            seq: self.seq,
            arabic: hadith.arabic,
            translation: hadith.translation,
        })
    }

    /// Completion of a previously issued request. Applied only when it is
    /// the newest one and the overlay is still open; late arrivals after a
    /// dismiss or a newer request are dropped whole.
    pub fn on_explanation(&mut self, seq: u64, text: String) {
        if seq != self.seq || self.selected.is_none() {
            return;
        }
        self.explanation = Some(text);
        self.loading = false;
    }

    /// Close the overlay. Selection and explanation go together.
    pub fn dismiss(&mut self) {
        self.selected = None;
        self.explanation = None;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::EXPLANATION_FALLBACK;

    #[test]
    fn explain_opens_overlay_and_describes_request() {
        let mut s = HadithScreen::new();
        let req = s.explain().unwrap();
        assert!(s.overlay_open());
        assert!(s.loading);
        assert_eq!(s.explanation, None);
        assert_eq!(req.arabic, s.hadiths[0].arabic);
        assert_eq!(req.translation, s.hadiths[0].translation);
    }

    #[test]
    fn completion_lands_and_clears_loading() {
        let mut s = HadithScreen::new();
        let req = s.explain().unwrap();
        s.on_explanation(req.seq, "A note on sincerity.".to_string());
        assert_eq!(s.explanation.as_deref(), Some("A note on sincerity."));
        assert!(!s.loading);
        assert!(s.overlay_open());
    }

    #[test]
    fn newest_request_wins_over_superseded_one() {
        let mut s = HadithScreen::new();
        let first = s.explain().unwrap();
        s.select_next();
        let second = s.explain().unwrap();
        assert_ne!(first.seq, second.seq);

        // first resolves late: dropped, still loading the second
        s.on_explanation(first.seq, "stale".to_string());
        assert_eq!(s.explanation, None);
        assert!(s.loading);

        s.on_explanation(second.seq, "fresh".to_string());
        assert_eq!(s.explanation.as_deref(), Some("fresh"));
        assert_eq!(s.selected.as_ref().map(|h| h.id), Some(s.hadiths[1].id));
    }

    #[test]
    fn dismiss_clears_selection_and_text_together() {
        let mut s = HadithScreen::new();
        let req = s.explain().unwrap();
        s.on_explanation(req.seq, "some sharh".to_string());
        s.dismiss();
        assert_eq!(s.selected, None);
        assert_eq!(s.explanation, None);
        assert!(!s.loading);
    }

    #[test]
    fn dismiss_while_loading_keeps_late_response_out() {
        let mut s = HadithScreen::new();
        let req = s.explain().unwrap();
        s.dismiss();

        // the request was never cancelled; its response must not reopen
        // or repopulate anything
        s.on_explanation(req.seq, "too late".to_string());
        assert_eq!(s.selected, None);
        assert_eq!(s.explanation, None);
        assert!(!s.overlay_open());
    }

    #[test]
    fn fallback_text_is_displayable() {
        let mut s = HadithScreen::new();
        let req = s.explain().unwrap();
        s.on_explanation(req.seq, EXPLANATION_FALLBACK.to_string());
        assert!(!s.loading);
        assert!(!s.explanation.as_deref().unwrap().is_empty());
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut s = HadithScreen::new();
        s.select_prev();
        assert_eq!(s.cursor, 0);
        for _ in 0..10 {
            s.select_next();
        }
        assert_eq!(s.cursor, s.hadiths.len() - 1);
    }
}
