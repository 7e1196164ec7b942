//! Single-open accordion groups.
//!
//! There is no central store: the open flags are read back from the DOM
//! markers at click time, turned into a plan, and the plan is applied.

/// Changes to make after a trigger click.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccordionPlan {
    /// Items to collapse (`max-height: 0`), in document order.
    pub close: Vec<usize>,
    /// Item to expand to its natural height.
    pub open: Option<usize>,
}

impl AccordionPlan {
    /// Plan for a click on item `clicked` of a group whose items are
    /// currently open per `open_flags`.
    ///
    /// Every open item is closed; the clicked item is opened only if it was
    /// closed. Even a malformed group with several open items ends with at
    /// most one open.
    pub fn for_click(open_flags: &[bool], clicked: usize) -> Self {
        let was_open = open_flags.get(clicked).copied().unwrap_or(false);
        let close = open_flags
            .iter()
            .enumerate()
            .filter_map(|(i, open)| open.then_some(i))
            .collect();
        let open = (!was_open && clicked < open_flags.len()).then_some(clicked);
        Self { close, open }
    }
}

/// `max-height` for an expanded panel.
pub fn expanded_height(scroll_height: f64) -> String {
    format!("{}px", scroll_height.max(0.0).round())
}

pub const COLLAPSED_HEIGHT: &str = "0";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Flags after `plan` is applied the way the page applies it.
    fn apply(plan: &AccordionPlan, open_flags: &[bool]) -> Vec<bool> {
        let mut next = open_flags.to_vec();
        for i in &plan.close {
            next[*i] = false;
        }
        if let Some(i) = plan.open {
            next[i] = true;
        }
        next
    }

    fn open_count(flags: &[bool]) -> usize {
        flags.iter().filter(|f| **f).count()
    }

    #[test]
    fn test_opening_b_closes_a() {
        let flags = [true, false, false];
        let plan = AccordionPlan::for_click(&flags, 1);
        assert_eq!(plan, AccordionPlan { close: vec![0], open: Some(1) });
        assert_eq!(apply(&plan, &flags), vec![false, true, false]);
    }

    #[test]
    fn test_clicking_open_item_leaves_none_open() {
        let flags = [false, true, false];
        let plan = AccordionPlan::for_click(&flags, 1);
        assert_eq!(plan, AccordionPlan { close: vec![1], open: None });
        assert_eq!(open_count(&apply(&plan, &flags)), 0);
    }

    #[test]
    fn test_at_most_one_open_for_any_click_sequence() {
        let mut flags = vec![false; 4];
        for clicked in [0, 0, 3, 1, 1, 2, 2, 2, 0] {
            flags = apply(&AccordionPlan::for_click(&flags, clicked), &flags);
            assert!(open_count(&flags) <= 1);
        }
        assert_eq!(flags, vec![true, false, false, false]);
    }

    #[test]
    fn test_malformed_group_converges() {
        let flags = [true, true, false];
        let next = apply(&AccordionPlan::for_click(&flags, 2), &flags);
        assert_eq!(next, vec![false, false, true]);
    }

    #[test]
    fn test_out_of_range_click_only_closes() {
        let flags = [true];
        let plan = AccordionPlan::for_click(&flags, 5);
        assert_eq!(plan.open, None);
    }

    #[test]
    fn test_heights() {
        assert_eq!(expanded_height(184.0), "184px");
        assert_eq!(COLLAPSED_HEIGHT, "0");
    }
}
