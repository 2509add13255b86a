//! Assigns a staff member to every task of a day, such that nobody works on two overlapping tasks,
//! only qualified staff are assigned, and nobody works more than their maximum number of hours.
//!
//! # Model
//! ```mzn
//! int: n_tasks;
//! int: n_staff;
//!
//! % Task `t` runs from `start[t]` up to, but excluding, `finish[t]`.
//! array [1..n_tasks] of int: start;
//! array [1..n_tasks] of int: finish;
//! array [1..n_staff] of int: max_hours;
//! array [1..n_staff, 1..n_tasks] of bool: qualified;
//!
//! array [1..n_tasks] of var 1..n_staff: who;
//!
//! constraint forall (t in 1..n_tasks) (qualified[who[t], t]);
//! constraint forall (t1, t2 in 1..n_tasks where t1 < t2
//!                    /\ start[t1] < finish[t2] /\ start[t2] < finish[t1]) (
//!     who[t1] != who[t2]
//! );
//! constraint forall (s in 1..n_staff) (
//!     sum (t in 1..n_tasks where who[t] = s) (finish[t] - start[t]) <= max_hours[s]
//! );
//! ```
//!
//! Run with `cargo run --example roster -- demos/data/clinic.dzn --strategy gac`.

use dzn_rs::DataFile;
use dzn_rs::ShapedArray;
use roster_csp::engine::VariableId;
use roster_csp::runner::Output;
use roster_csp::runner::Problem;
use roster_csp::Csp;

roster_csp::entry_point!(problem = Roster);

struct Roster {
    who: Vec<VariableId>,
}

struct Task {
    start: i32,
    finish: i32,
}

impl Task {
    fn duration(&self) -> i32 {
        self.finish - self.start
    }

    fn overlaps(&self, other: &Task) -> bool {
        self.start < other.finish && other.start < self.finish
    }
}

impl Problem for Roster {
    fn create(data: DataFile<i32>) -> anyhow::Result<(Self, Csp)> {
        let n_tasks = get_size(&data, "n_tasks")?;
        let n_staff = get_size(&data, "n_staff")?;

        let start = get_row(&data, "start", n_tasks)?;
        let finish = get_row(&data, "finish", n_tasks)?;
        let max_hours = get_row(&data, "max_hours", n_staff)?;
        let qualified = data
            .array_2d::<bool>("qualified", [n_staff, n_tasks])
            .ok_or_else(|| anyhow::anyhow!("Missing 2d bool array 'qualified'."))?;

        let tasks = start
            .into_iter()
            .zip(finish)
            .map(|(start, finish)| Task { start, finish })
            .collect::<Vec<_>>();
        for (t, task) in tasks.iter().enumerate() {
            anyhow::ensure!(
                task.duration() > 0,
                "Task {} should finish after it starts.",
                t + 1
            );
        }

        let mut csp = Csp::new("roster");

        // Staff members are numbered from 1; only qualified staff enter the domain of a task.
        let who = (0..n_tasks)
            .map(|t| {
                let staff = (0..n_staff)
                    .filter(|&s| is_qualified(qualified, s, t))
                    .map(|s| s as i32 + 1);
                csp.add_variable(format!("who[{}]", t + 1), staff)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (t1, first) in tasks.iter().enumerate() {
            for (t2, second) in tasks.iter().enumerate().skip(t1 + 1) {
                if !first.overlaps(second) {
                    continue;
                }

                let tuples = csp
                    .domain(who[t1])
                    .original_values()
                    .iter()
                    .flat_map(|&a| {
                        csp.domain(who[t2])
                            .original_values()
                            .iter()
                            .filter(move |&&b| a != b)
                            .map(move |&b| vec![a, b])
                    })
                    .collect::<Vec<_>>();

                let _ = csp.add_table_constraint(
                    format!("tasks {} and {} overlap", t1 + 1, t2 + 1),
                    [who[t1], who[t2]],
                    tuples,
                )?;
            }
        }

        for (s, &limit) in max_hours.iter().enumerate() {
            let member = s as i32 + 1;
            let (scope, durations): (Vec<VariableId>, Vec<i32>) = (0..n_tasks)
                .filter(|&t| is_qualified(qualified, s, t))
                .map(|t| (who[t], tasks[t].duration()))
                .unzip();
            if scope.is_empty() {
                continue;
            }

            let _ = csp.add_predicate_constraint(
                format!("staff {member} works at most {limit} hours"),
                scope,
                move |tuple: &[i32]| {
                    tuple
                        .iter()
                        .zip(&durations)
                        .filter(|(&assigned, _)| assigned == member)
                        .map(|(_, &duration)| duration)
                        .sum::<i32>()
                        <= limit
                },
            )?;
        }

        Ok((Roster { who }, csp))
    }

    fn get_output_variables(&self) -> impl Iterator<Item = Output> + '_ {
        std::iter::once(Output::Array("who".to_owned(), self.who.clone()))
    }
}

fn get_size(data: &DataFile<i32>, name: &str) -> anyhow::Result<usize> {
    let value: i32 = data
        .get(name)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Missing int parameter '{name}' in data."))?;

    value
        .try_into()
        .map_err(|_| anyhow::anyhow!("'{name}' should be an unsigned integer."))
}

fn get_row(data: &DataFile<i32>, name: &str, length: usize) -> anyhow::Result<Vec<i32>> {
    let array = data
        .array_1d::<i32>(name, length)
        .ok_or_else(|| anyhow::anyhow!("Missing int array '{name}' of length {length}."))?;

    Ok((0..length)
        .filter_map(|index| array.get([index]).copied())
        .collect())
}

fn is_qualified(qualified: &ShapedArray<bool, 2>, staff: usize, task: usize) -> bool {
    qualified.get([staff, task]).copied().unwrap_or(false)
}
