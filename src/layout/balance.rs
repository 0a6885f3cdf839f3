use crate::layout::paragraph::Paragraph;
use std::ops::Range;

/// Paragraph indices at which pages begin, bracketed by `0` and the paragraph
/// count: page `i` holds paragraphs `boundaries[i]..boundaries[i + 1]`.
/// Consecutive boundaries may be equal, in which case that page is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPlan(Vec<usize>);

impl SplitPlan {
    pub fn boundaries(&self) -> &[usize] {
        &self.0
    }

    /// The paragraph range of every non-empty page, in order
    pub fn pages(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.0
            .windows(2)
            .map(|pair| pair[0]..pair[1])
            .filter(|range| !range.is_empty())
    }
}

/// Running display-line totals over a list of paragraphs: entry `i` is the number
/// of lines the first `i` paragraphs take up, blank separators included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCounts(Vec<usize>);

impl LineCounts {
    pub fn new(paragraphs: &[Paragraph]) -> LineCounts {
        let mut cumulative = Vec::with_capacity(paragraphs.len() + 1);
        cumulative.push(0);
        let mut total = 0;
        for (i, paragraph) in paragraphs.iter().enumerate() {
            total += paragraph.len();
            if i > 0 {
                total += 1;
            }
            cumulative.push(total);
        }
        LineCounts(cumulative)
    }

    /// Number of paragraphs counted
    pub fn paragraphs(&self) -> usize {
        self.0.len() - 1
    }

    pub fn total(&self) -> usize {
        self.0[self.paragraphs()]
    }

    /// Lines on a page holding paragraphs `from..to`. The separator ahead of a
    /// page's first paragraph is not drawn, so it is not counted
    pub fn page_lines(&self, from: usize, to: usize) -> usize {
        if to <= from {
            0
        } else if from == 0 {
            self.0[to]
        } else {
            self.0[to] - self.0[from] - 1
        }
    }
}

/// Chooses page boundaries between paragraphs so that `num_pages` pages come out
/// as evenly filled as possible while each holds at most `max_lines_per_page`
/// lines.
///
/// Two pages are balanced exactly. For three or more pages each boundary is
/// placed greedily, from left to right, as close as the paragraphs allow to an
/// even share of the lines that remain. That is not always the globally most
/// even split, but it is predictable and cheap. A paragraph taller than the
/// ceiling still gets a page of its own, and a single page takes everything
/// regardless of the ceiling.
pub fn balance(
    paragraphs: &[Paragraph],
    num_pages: usize,
    max_lines_per_page: i32,
) -> SplitPlan {
    let counts = LineCounts::new(paragraphs);
    let n = counts.paragraphs();
    let max_lines = max_lines_per_page.max(1) as usize;

    match num_pages {
        0 | 1 => SplitPlan(vec![0, n]),
        2 => SplitPlan(vec![0, best_split_in_two(&counts, max_lines), n]),
        _ => SplitPlan(greedy_splits(&counts, num_pages, max_lines)),
    }
}

fn best_split_in_two(counts: &LineCounts, max_lines: usize) -> usize {
    let n = counts.paragraphs();
    let mut best = 1;
    let mut best_diff = usize::MAX;

    for i in 1..n {
        let first = counts.page_lines(0, i);
        let second = counts.page_lines(i, n);
        if first > max_lines || second > max_lines {
            continue;
        }
        let diff = first.abs_diff(second);
        if diff < best_diff {
            log::trace!("two-page split at {i}: {first} / {second}");
            best_diff = diff;
            best = i;
        }
    }
    best.min(n)
}

fn greedy_splits(counts: &LineCounts, num_pages: usize, max_lines: usize) -> Vec<usize> {
    let n = counts.paragraphs();
    let mut splits = Vec::with_capacity(num_pages + 1);
    splits.push(0);

    for page in 0..num_pages - 1 {
        let from = splits[splits.len() - 1];
        if from >= n {
            splits.push(n);
            continue;
        }

        let target = counts.page_lines(from, n) / (num_pages - page);
        let mut best = from + 1;
        let mut best_diff = usize::MAX;
        for j in from + 1..=n {
            let lines = counts.page_lines(from, j);
            if lines > max_lines {
                break;
            }
            let diff = lines.abs_diff(target);
            if diff < best_diff {
                best_diff = diff;
                best = j;
            }
        }
        log::trace!("page {} takes paragraphs {from}..{best} (target {target})", page + 1);
        splits.push(best);
    }

    splits.push(n);
    splits
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Paragraphs with the given line counts
    fn paragraphs(sizes: &[usize]) -> Vec<Paragraph> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                Paragraph::new((0..size).map(|l| format!("p{i}l{l}")).collect())
                    .expect("non-empty paragraph")
            })
            .collect()
    }

    fn page_sizes(sizes: &[usize], plan: &SplitPlan) -> Vec<usize> {
        let counts = LineCounts::new(&paragraphs(sizes));
        plan.pages().map(|r| counts.page_lines(r.start, r.end)).collect()
    }

    #[test]
    fn cumulative_counts_include_separators() {
        let counts = LineCounts::new(&paragraphs(&[1, 2, 1]));
        assert_eq!(counts.0, vec![0, 1, 4, 6]);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.page_lines(0, 2), 4);
        assert_eq!(counts.page_lines(1, 3), 4);
        assert_eq!(counts.page_lines(2, 3), 1);
        assert_eq!(counts.page_lines(2, 2), 0);
    }

    #[test]
    fn single_page_ignores_the_ceiling() {
        let plan = balance(&paragraphs(&[5, 5, 5]), 1, 2);
        assert_eq!(plan.boundaries(), &[0, 3]);
        assert_eq!(balance(&paragraphs(&[5]), 0, 2).boundaries(), &[0, 1]);
    }

    #[test]
    fn two_pages_of_three_and_seven() {
        let plan = balance(&paragraphs(&[3, 7]), 2, 10);
        assert_eq!(plan.boundaries(), &[0, 1, 2]);
        assert_eq!(page_sizes(&[3, 7], &plan), vec![3, 7]);
    }

    #[test]
    fn two_pages_respect_the_ceiling() {
        // the candidates are 4 / 8, 6 / 6 and 8 / 4
        let sizes = [4, 1, 1, 4];
        let plan = balance(&paragraphs(&sizes), 2, 6);
        assert_eq!(page_sizes(&sizes, &plan), vec![6, 6]);

        let plan = balance(&paragraphs(&sizes), 2, 5);
        // nothing fits; falls back to splitting after the first paragraph
        assert_eq!(plan.boundaries(), &[0, 1, 4]);
    }

    #[test]
    fn two_pages_ties_keep_the_earliest_split() {
        let plan = balance(&paragraphs(&[2, 1, 2]), 2, 10);
        // 2 / 4 and 4 / 2 are equally uneven
        assert_eq!(plan.boundaries(), &[0, 1, 3]);
    }

    #[test]
    fn two_page_split_is_optimal() {
        let cases: &[&[usize]] = &[
            &[1, 1, 1, 1, 1],
            &[5, 1, 1, 1, 9],
            &[3, 3, 2, 8, 1, 1],
            &[10, 2, 2, 2],
            &[1, 7, 1, 7, 2],
        ];
        for sizes in cases {
            let counts = LineCounts::new(&paragraphs(sizes));
            let n = sizes.len();
            for ceiling in 1..=counts.total() {
                let plan = balance(&paragraphs(sizes), 2, ceiling as i32);
                let split = plan.boundaries()[1];
                let best = (1..n)
                    .filter(|&i| {
                        counts.page_lines(0, i) <= ceiling && counts.page_lines(i, n) <= ceiling
                    })
                    .map(|i| counts.page_lines(0, i).abs_diff(counts.page_lines(i, n)))
                    .min();
                if let Some(best) = best {
                    let chosen = counts.page_lines(0, split).abs_diff(counts.page_lines(split, n));
                    assert_eq!(chosen, best, "sizes {sizes:?}, ceiling {ceiling}");
                }
            }
        }
    }

    #[test]
    fn greedy_spreads_lines_over_three_pages() {
        let sizes = [2, 2, 2, 2, 2, 2];
        let plan = balance(&paragraphs(&sizes), 3, 8);
        assert_eq!(plan.boundaries(), &[0, 2, 4, 6]);
        assert_eq!(page_sizes(&sizes, &plan), vec![5, 5, 5]);
    }

    #[test]
    fn greedy_keeps_leading_pages_under_the_ceiling() {
        let sizes = [3, 1, 4, 1, 5, 2, 6, 3];
        let plan = balance(&paragraphs(&sizes), 4, 9);
        let pages = page_sizes(&sizes, &plan);
        assert!(pages[..pages.len() - 1].iter().all(|&lines| lines <= 9), "{pages:?}");
        let covered: usize = plan.pages().map(|r| r.len()).sum();
        assert_eq!(covered, sizes.len());
    }

    #[test]
    fn greedy_runs_out_of_paragraphs() {
        let plan = balance(&paragraphs(&[1, 1]), 4, 1);
        assert_eq!(plan.boundaries(), &[0, 1, 2, 2, 2]);
        assert_eq!(plan.pages().count(), 2);
    }

    #[test]
    fn no_paragraphs_means_no_pages() {
        for num_pages in 0..5 {
            assert_eq!(balance(&[], num_pages, 10).pages().count(), 0);
        }
    }

    #[test]
    fn non_positive_ceiling_is_clamped() {
        let plan = balance(&paragraphs(&[1, 1, 1]), 3, 0);
        assert_eq!(plan.boundaries(), &[0, 1, 2, 3]);
        let plan = balance(&paragraphs(&[1, 1, 1]), 3, -4);
        assert_eq!(plan.boundaries(), &[0, 1, 2, 3]);
    }

    #[test]
    fn oversized_paragraph_gets_its_own_page() {
        let plan = balance(&paragraphs(&[12, 2, 2]), 3, 5);
        assert_eq!(plan.boundaries(), &[0, 1, 2, 3]);
    }
}
