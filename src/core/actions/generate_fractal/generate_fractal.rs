use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::circle::Circle;
use crate::core::data::fractal::Fractal;

/// One pass of a parent's descent loop: its ring of children, all of which
/// descend with the same `budget`.
struct Ring {
    parent: Circle,
    budget: u32,
    child_radius: f64,
    next_branch: usize,
}

/// Consumes one unit of `budget` and opens the next ring around `parent`.
///
/// Returns `None` once the budget is spent or the child radius falls outside
/// the algorithm's bounds.
fn open_ring<Alg: FractalAlgorithm + ?Sized>(
    algorithm: &Alg,
    parent: Circle,
    budget: u32,
) -> Option<Ring> {
    if budget == 0 {
        return None;
    }

    let child_radius = algorithm.child_radius(&parent)?;

    Some(Ring {
        parent,
        budget: budget - 1,
        child_radius,
        next_branch: 0,
    })
}

/// Appends every descendant of `root` to `circles`, depth first.
///
/// Runs on an explicit stack so deep budgets cannot overflow the thread stack.
pub(crate) fn descend<Alg: FractalAlgorithm + ?Sized>(
    algorithm: &Alg,
    root: Circle,
    budget: u32,
    circles: &mut Vec<Circle>,
    limit: Option<u64>,
) -> Result<(), GenerateFractalError> {
    let branch_count = algorithm.branch_count();
    let mut stack: Vec<Ring> = open_ring(algorithm, root, budget).into_iter().collect();

    while let Some(ring) = stack.last_mut() {
        if ring.next_branch < branch_count {
            let center = algorithm.child_center(&ring.parent, ring.next_branch);
            let child = Circle::new(center, ring.child_radius);
            let child_budget = ring.budget;
            ring.next_branch += 1;

            if let Some(limit) = limit {
                if circles.len() as u64 >= limit {
                    return Err(GenerateFractalError::LimitExceeded { limit });
                }
            }

            circles.push(child);

            if let Some(child_ring) = open_ring(algorithm, child, child_budget) {
                stack.push(child_ring);
            }
        } else {
            let (parent, remaining) = (ring.parent, ring.budget);

            match open_ring(algorithm, parent, remaining) {
                Some(next_ring) => *ring = next_ring,
                None => {
                    stack.pop();
                }
            }
        }
    }

    Ok(())
}

/// Generates the whole fractal, seed first.
pub fn generate_fractal<Alg: FractalAlgorithm + ?Sized>(algorithm: &Alg) -> Fractal {
    let seed = algorithm.seed();
    let mut circles = vec![seed];

    descend(algorithm, seed, algorithm.max_depth(), &mut circles, None)
        .unwrap_or_else(|_| unreachable!("unlimited descent never fails"));

    Fractal::from_circles(circles)
}

/// Like [`generate_fractal`], but gives up as soon as the fractal would hold
/// more than `limit` circles.
pub fn generate_fractal_limited<Alg: FractalAlgorithm + ?Sized>(
    algorithm: &Alg,
    limit: u64,
) -> Result<Fractal, GenerateFractalError> {
    if limit == 0 {
        return Err(GenerateFractalError::LimitExceeded { limit });
    }

    let seed = algorithm.seed();
    let mut circles = vec![seed];

    descend(algorithm, seed, algorithm.max_depth(), &mut circles, Some(limit))?;

    Ok(Fractal::from_circles(circles))
}
