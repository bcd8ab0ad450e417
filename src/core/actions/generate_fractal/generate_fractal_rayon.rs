use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal::descend;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::circle::Circle;
use crate::core::data::fractal::Fractal;

/// Generates the fractal with rayon's work-stealing scheduler.
///
/// Every child of the seed, for every pass of the seed's descent loop, becomes
/// one task that builds its subtree sequentially. Subtrees are concatenated in
/// traversal order, so the result is identical to
/// [`generate_fractal`](crate::core::actions::generate_fractal::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Fractal
where
    Alg: FractalAlgorithm + Sync + ?Sized,
{
    let seed = algorithm.seed();
    let max_depth = algorithm.max_depth();

    let Some(child_radius) = (max_depth > 0)
        .then(|| algorithm.child_radius(&seed))
        .flatten()
    else {
        return Fractal::from_circles(vec![seed]);
    };

    let branch_count = algorithm.branch_count();

    // Budgets handed to the seed's children, one per pass of its loop.
    let tasks: Vec<(u32, usize)> = (0..max_depth)
        .rev()
        .flat_map(|budget| (0..branch_count).map(move |branch| (budget, branch)))
        .collect();

    let subtrees: Vec<Vec<Circle>> = tasks
        .into_par_iter()
        .map(|(budget, branch)| {
            let child = Circle::new(algorithm.child_center(&seed, branch), child_radius);
            let mut subtree = vec![child];

            descend(algorithm, child, budget, &mut subtree, None)
                .unwrap_or_else(|_| unreachable!("unlimited descent never fails"));

            subtree
        })
        .collect();

    let total = 1 + subtrees.iter().map(Vec::len).sum::<usize>();
    let mut circles = Vec::with_capacity(total);
    circles.push(seed);
    circles.extend(subtrees.into_iter().flatten());

    Fractal::from_circles(circles)
}
