use super::extractor::RawRun;
use super::options::SegmentOptions;

/// Logical line assembled from one or more raw runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MergedRun {
    /// Length-weighted mean column of the components, rounded.
    pub x: usize,
    pub start_y: usize,
    pub end_y: usize,
    pub min_x: usize,
    pub max_x: usize,
    pub components: usize,
}

struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// The smaller root survives so that components are keyed by their
    /// earliest member.
    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            let (keep, drop) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[drop] = keep;
        }
    }
}

/// Merge runs transitively: two runs join when their columns differ by at
/// most `x_tolerance` and at most `gap_tolerance` rows separate them.
///
/// Output is ordered by the first member of each component in
/// `(anchor_x, start_y)` order.
pub(crate) fn merge_runs(mut runs: Vec<RawRun>, options: &SegmentOptions) -> Vec<MergedRun> {
    runs.sort_by_key(|r| (r.anchor_x, r.start_y));
    let n = runs.len();
    let mut sets = DisjointSet::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if runs[j].anchor_x - runs[i].anchor_x > options.x_tolerance {
                break;
            }
            let gap = runs[i].start_y.max(runs[j].start_y) as i64
                - runs[i].end_y.min(runs[j].end_y) as i64
                - 1;
            if gap <= options.gap_tolerance as i64 {
                sets.union(i, j);
            }
        }
    }

    let mut order: Vec<usize> = Vec::new();
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        let root = sets.find(i);
        if groups[root].is_empty() {
            order.push(root);
        }
        groups[root].push(i);
    }

    order
        .into_iter()
        .map(|root| {
            let members = &groups[root];
            let mut weighted = 0usize;
            let mut total = 0usize;
            let mut merged = MergedRun {
                x: 0,
                start_y: usize::MAX,
                end_y: 0,
                min_x: usize::MAX,
                max_x: 0,
                components: members.len(),
            };
            for &m in members {
                let run = &runs[m];
                weighted += run.anchor_x * run.len();
                total += run.len();
                merged.start_y = merged.start_y.min(run.start_y);
                merged.end_y = merged.end_y.max(run.end_y);
                merged.min_x = merged.min_x.min(run.anchor_x);
                merged.max_x = merged.max_x.max(run.anchor_x);
            }
            merged.x = (weighted + total / 2) / total;
            merged
        })
        .collect()
}
