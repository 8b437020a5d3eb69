use std::{fmt, time::Duration};

use serde::Serialize;

use crate::search::{DeepeningOutcome, SearchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    DepthLimited,
    IterativeDeepening,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::DepthLimited => "DLS",
            Algorithm::IterativeDeepening => "IDS",
        }
    }
}

/// What one strategy produced. Targeted searches fill `path` and `steps`;
/// the exploration fills `reached`. `depth` is the budget a depth-bounded
/// search ended on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmReport<U> {
    pub algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<U>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reached: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    pub elapsed_secs: f64,
}

impl<U> AlgorithmReport<U> {
    pub fn search(algorithm: Algorithm, outcome: SearchOutcome<U>, elapsed: Duration) -> Self {
        AlgorithmReport {
            algorithm,
            path: outcome.path,
            steps: Some(outcome.steps),
            reached: None,
            depth: None,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    pub fn depth_limited(outcome: SearchOutcome<U>, depth: usize, elapsed: Duration) -> Self {
        Self::search(Algorithm::DepthLimited, outcome, elapsed).with_depth(depth)
    }

    pub fn deepening(result: DeepeningOutcome<U>, elapsed: Duration) -> Self {
        Self::search(Algorithm::IterativeDeepening, result.outcome, elapsed)
            .with_depth(result.depth)
    }

    pub fn exploration(connections: &[U], elapsed: Duration) -> Self {
        AlgorithmReport {
            algorithm: Algorithm::Dfs,
            path: None,
            steps: None,
            reached: Some(connections.len()),
            depth: None,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// All strategy reports of one driver run, plus the network they ran on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport<U> {
    pub users: usize,
    pub friendships: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub start: U,
    pub target: U,
    pub runs: Vec<AlgorithmReport<U>>,
}

impl<U> RunReport<U> {
    pub fn new(users: usize, friendships: usize, seed: Option<u64>, start: U, target: U) -> Self {
        RunReport {
            users,
            friendships,
            seed,
            start,
            target,
            runs: Vec::new(),
        }
    }

    pub fn push(&mut self, report: AlgorithmReport<U>) {
        self.runs.push(report)
    }
}

impl<U: fmt::Display> fmt::Display for RunReport<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Network: {} users, {} friendships",
            self.users, self.friendships
        )?;

        for run in &self.runs {
            writeln!(f)?;
            writeln!(f, "{} Result:", run.algorithm.label())?;

            if let Some(reached) = run.reached {
                writeln!(
                    f,
                    "All connections from {}: {reached} connections found.",
                    self.start
                )?;
                writeln!(f, "Time taken: {:.6} seconds.", run.elapsed_secs)?;
                continue;
            }

            match &run.path {
                Some(path) => {
                    let joined = path
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" -> ");
                    let heading = match run.algorithm {
                        Algorithm::Bfs => "Shortest path",
                        _ => "Path found",
                    };
                    writeln!(
                        f,
                        "{heading} from {} to {}: {joined}",
                        self.start, self.target
                    )?;
                }
                None => writeln!(f, "No path found from {} to {}.", self.start, self.target)?,
            }
            if let Some(depth) = run.depth {
                writeln!(f, "Depth budget: {depth}")?;
            }
            writeln!(
                f,
                "Steps taken: {}, Time taken: {:.6} seconds.",
                run.steps.unwrap_or(0),
                run.elapsed_secs
            )?;
        }
        Ok(())
    }
}

pub const COMPLEXITY_NOTES: &str = "\
BFS Complexity: O(V + E) - Visits each user and friendship once.
DFS Complexity: O(V + E) - Similar to BFS, visits each user and friendship once.
DLS Complexity: O(b^d) - Dependent on depth limit and branching factor.
IDS Complexity: O(b^d) - Similar to DLS but better practical performance due to depth iterations.";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport<String> {
        let mut report = RunReport::new(4, 3, Some(42), "A".to_string(), "D".to_string());
        let path: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        report.push(AlgorithmReport::search(
            Algorithm::Bfs,
            SearchOutcome::found(path.clone(), 4),
            Duration::from_millis(2),
        ));
        report.push(AlgorithmReport::exploration(&path, Duration::from_millis(1)));
        report.push(AlgorithmReport::depth_limited(
            SearchOutcome::not_found(1),
            2,
            Duration::ZERO,
        ));
        report.push(AlgorithmReport::deepening(
            DeepeningOutcome {
                outcome: SearchOutcome::found(path, 4),
                depth: 3,
            },
            Duration::from_micros(5),
        ));
        report
    }

    #[test]
    fn test_new_report_has_no_runs() {
        let report = RunReport::new(10, 20, None, 0u32, 1u32);
        assert!(report.runs.is_empty());
        assert_eq!(report.users, 10);
        assert_eq!(report.friendships, 20);
    }

    #[test]
    fn test_search_report_keeps_outcome() {
        let report = AlgorithmReport::search(
            Algorithm::Bfs,
            SearchOutcome::found(vec![1, 2], 2),
            Duration::from_secs(1),
        );
        assert_eq!(report.path, Some(vec![1, 2]));
        assert_eq!(report.steps, Some(2));
        assert_eq!(report.reached, None);
        assert_eq!(report.elapsed_secs, 1.0);
    }

    #[test]
    fn test_exploration_report_counts_connections() {
        let report = AlgorithmReport::exploration(&[1, 2, 3], Duration::ZERO);
        assert_eq!(report.algorithm, Algorithm::Dfs);
        assert_eq!(report.reached, Some(3));
        assert_eq!(report.path, None);
    }

    #[test]
    fn test_human_rendering() {
        let rendered = sample_report().to_string();
        assert!(rendered.contains("Network: 4 users, 3 friendships"));
        assert!(rendered.contains("BFS Result:"));
        assert!(rendered.contains("Shortest path from A to D: A -> B -> C -> D"));
        assert!(rendered.contains("Path found from A to D: A -> B -> C -> D"));
        assert_eq!(rendered.matches("Path found from").count(), 1);
        assert!(rendered.contains("All connections from A: 4 connections found."));
        assert!(rendered.contains("No path found from A to D."));
        assert!(rendered.contains("Depth budget: 3"));
        assert!(rendered.contains("Steps taken: 4, Time taken: 0.002000 seconds."));
    }

    #[test]
    fn test_json_rendering() {
        let value = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(value["seed"], 42);
        assert_eq!(value["runs"][0]["algorithm"], "bfs");
        assert_eq!(value["runs"][0]["path"][3], "D");
        assert_eq!(value["runs"][1]["reached"], 4);
        assert!(value["runs"][1].get("path").is_none());
        assert_eq!(value["runs"][2]["algorithm"], "depth-limited");
        assert_eq!(value["runs"][3]["algorithm"], "iterative-deepening");
        assert_eq!(value["runs"][3]["depth"], 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Algorithm::Bfs.label(), "BFS");
        assert_eq!(Algorithm::Dfs.label(), "DFS");
        assert_eq!(Algorithm::DepthLimited.label(), "DLS");
        assert_eq!(Algorithm::IterativeDeepening.label(), "IDS");
    }
}
