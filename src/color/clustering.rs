//! Deterministic two-group color clustering
//!
//! Splits a pixel set into two groups by Euclidean distance and reports
//! the centroid of the larger group as the dominant color.
//!
//! Seeding is deterministic: the first centroid is the middle pixel of
//! the input, the second is the pixel farthest from it (lowest index on
//! ties). Pixels equidistant from both centroids join cluster 0, and
//! when both groups end up the same size cluster 0 is dominant.

/// Assignment passes before giving up on convergence
const MAX_ITERATIONS: usize = 50;

/// Result of a two-means run
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult {
    /// Cluster centroids, index 0 seeded from the middle pixel
    pub centroids: [[f32; 3]; 2],
    /// Number of pixels assigned to each cluster
    pub counts: [usize; 2],
    /// Passes until the assignment stopped changing
    pub iterations: usize,
}

impl ClusterResult {
    /// Index of the larger cluster; cluster 0 wins ties
    pub fn dominant_index(&self) -> usize {
        if self.counts[1] > self.counts[0] {
            1
        } else {
            0
        }
    }

    /// Centroid of the larger cluster
    pub fn dominant(&self) -> [f32; 3] {
        self.centroids[self.dominant_index()]
    }

    /// Dominant centroid truncated to integer channels
    pub fn dominant_truncated(&self) -> [u16; 3] {
        let c = self.dominant();
        [
            c[0].max(0.0) as u16,
            c[1].max(0.0) as u16,
            c[2].max(0.0) as u16,
        ]
    }
}

fn dist_sq(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    let (d0, d1, d2) = (a[0] - b[0], a[1] - b[1], a[2] - b[2]);
    d0 * d0 + d1 * d1 + d2 * d2
}

fn nearest(p: &[f32; 3], centroids: &[[f32; 3]; 2]) -> usize {
    if dist_sq(p, &centroids[1]) < dist_sq(p, &centroids[0]) {
        1
    } else {
        0
    }
}

/// Cluster `pixels` into two groups
///
/// Returns `None` for an empty input.
pub fn two_means(pixels: &[[f32; 3]]) -> Option<ClusterResult> {
    if pixels.is_empty() {
        return None;
    }

    let first = pixels[pixels.len() / 2];
    let mut best = (0.0f32, 0usize);
    for (i, p) in pixels.iter().enumerate() {
        let d = dist_sq(p, &first);
        if d > best.0 {
            best = (d, i);
        }
    }
    let mut centroids = [first, pixels[best.1]];

    let mut labels = vec![usize::MAX; pixels.len()];
    let mut counts = [0usize; 2];
    let mut iterations = 0;

    while iterations < MAX_ITERATIONS {
        iterations += 1;

        let mut changed = false;
        let mut sums = [[0.0f64; 3]; 2];
        counts = [0, 0];

        for (label, p) in labels.iter_mut().zip(pixels) {
            let c = nearest(p, &centroids);
            if *label != c {
                *label = c;
                changed = true;
            }
            counts[c] += 1;
            for ch in 0..3 {
                sums[c][ch] += p[ch] as f64;
            }
        }

        for c in 0..2 {
            if counts[c] > 0 {
                for ch in 0..3 {
                    centroids[c][ch] = (sums[c][ch] / counts[c] as f64) as f32;
                }
            }
        }

        if !changed {
            break;
        }
    }

    Some(ClusterResult {
        centroids,
        counts,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(two_means(&[]).is_none());
    }

    #[test]
    fn test_uniform_input_is_single_group() {
        let pixels = vec![[10.0, 100.0, 120.0]; 30];
        let result = two_means(&pixels).unwrap();
        assert_eq!(result.counts, [30, 0]);
        assert_eq!(result.dominant_truncated(), [10, 100, 120]);
    }

    #[test]
    fn test_larger_group_dominates() {
        let mut pixels = vec![[100.0, 80.0, 150.0]; 70];
        pixels.extend(vec![[10.0, 200.0, 60.0]; 30]);

        let result = two_means(&pixels).unwrap();
        assert_eq!(result.dominant_truncated(), [100, 80, 150]);
        assert_eq!(result.counts[result.dominant_index()], 70);
    }

    #[test]
    fn test_equal_groups_pick_cluster_zero() {
        let mut pixels = vec![[20.0, 20.0, 20.0]; 10];
        pixels.extend(vec![[200.0, 200.0, 200.0]; 10]);

        let result = two_means(&pixels).unwrap();
        assert_eq!(result.counts, [10, 10]);
        assert_eq!(result.dominant_index(), 0);
        // Cluster 0 is seeded from the middle pixel, which belongs to the bright half
        assert_eq!(result.dominant_truncated(), [200, 200, 200]);
    }

    #[test]
    fn test_centroid_is_group_mean() {
        let mut pixels = vec![[10.0, 10.0, 10.0], [12.0, 12.0, 12.0], [14.0, 14.0, 14.0]];
        pixels.extend(vec![[250.0, 250.0, 250.0]; 2]);

        let result = two_means(&pixels).unwrap();
        assert_eq!(result.dominant_truncated(), [12, 12, 12]);
    }

    #[test]
    fn test_repeatable() {
        let pixels: Vec<[f32; 3]> = (0..200)
            .map(|i| [(i % 17) as f32, (i * 7 % 255) as f32, (i * 13 % 255) as f32])
            .collect();
        assert_eq!(two_means(&pixels), two_means(&pixels));
    }
}
