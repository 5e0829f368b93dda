//! Least-fixed-point closure over a monotone production relation.
//!
//! Given a set of axioms and productions of the form `inputs -> output`, the
//! closure is the smallest set that contains every axiom and contains a
//! production's output whenever it contains all of that production's inputs.
//! A node with several productions becomes reachable as soon as any one of
//! them is satisfied.
//!
//! The computation is a worklist in the style of Kahn's algorithm: each
//! production tracks how many distinct inputs are still missing, and each
//! newly reached node decrements the counters of the productions that wait on
//! it. Every production is visited once per distinct input, so the cost is
//! linear in the total size of the relation. Nodes that can only be produced
//! from each other (cycles with no grounded entry point) are never reached.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// One way of producing `output` from `inputs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production<T> {
    pub output: T,
    pub inputs: Vec<T>,
}

impl<T> Production<T> {
    pub fn new(output: T, inputs: Vec<T>) -> Self {
        Self { output, inputs }
    }
}

/// Compute every node derivable from `axioms` through `productions`.
pub fn least_fixed_point<T>(
    axioms: impl IntoIterator<Item = T>,
    productions: &[Production<T>],
) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    let mut reachable: HashSet<T> = HashSet::new();
    let mut queue: VecDeque<T> = VecDeque::new();

    // Per production: number of distinct inputs not yet reachable.
    let mut missing: Vec<usize> = Vec::with_capacity(productions.len());
    let mut waiting: HashMap<&T, Vec<usize>> = HashMap::new();

    for (idx, production) in productions.iter().enumerate() {
        let distinct: HashSet<&T> = production.inputs.iter().collect();
        missing.push(distinct.len());
        for input in distinct {
            waiting.entry(input).or_default().push(idx);
        }
    }

    for axiom in axioms {
        if reachable.insert(axiom.clone()) {
            queue.push_back(axiom);
        }
    }

    // Productions without inputs hold unconditionally.
    for (idx, production) in productions.iter().enumerate() {
        if missing[idx] == 0 && reachable.insert(production.output.clone()) {
            queue.push_back(production.output.clone());
        }
    }

    while let Some(node) = queue.pop_front() {
        let Some(dependents) = waiting.get(&node) else {
            continue;
        };
        for &idx in dependents {
            missing[idx] -= 1;
            if missing[idx] == 0 {
                let output = &productions[idx].output;
                if reachable.insert(output.clone()) {
                    queue.push_back(output.clone());
                }
            }
        }
    }

    reachable
}
