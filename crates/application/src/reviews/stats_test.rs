#[cfg(test)]
mod tests {
    use crate::reviews::stats::{clamp_rating, rating_stats};

    #[test]
    fn test_clamp_rating() {
        assert_eq!(clamp_rating(7.0), 5.0);
        assert_eq!(clamp_rating(0.0), 1.0);
        assert_eq!(clamp_rating(-3.0), 1.0);
        assert_eq!(clamp_rating(3.5), 3.5);
        assert_eq!(clamp_rating(1.0), 1.0);
        assert_eq!(clamp_rating(5.0), 5.0);
    }

    #[test]
    fn test_stats_empty() {
        let stats = rating_stats(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average, 0.0);
        for star in ["1", "2", "3", "4", "5"] {
            assert_eq!(stats.percentages[star], 0.0);
        }
    }

    #[test]
    fn test_stats_cafe_x_scenario() {
        // Four approved ratings {5, 5, 4, 3}: average 4.25, buckets 4 and 5
        // populated, buckets 1 and 2 empty.
        let stats = rating_stats(&[5.0, 5.0, 4.0, 3.0]);
        assert_eq!(stats.count, 4);
        assert!((stats.average - 4.25).abs() < 1e-9);
        assert_eq!(stats.percentages["5"], 50.0);
        assert_eq!(stats.percentages["4"], 25.0);
        assert_eq!(stats.percentages["3"], 25.0);
        assert_eq!(stats.percentages["2"], 0.0);
        assert_eq!(stats.percentages["1"], 0.0);
    }

    #[test]
    fn test_stats_percentages_sum_to_100() {
        let stats = rating_stats(&[1.0, 2.0, 2.5, 3.3, 4.9, 5.0, 5.0]);
        let total: f64 = stats.percentages.values().sum();
        assert!((total - 100.0).abs() < 0.5, "sum was {}", total);
    }

    #[test]
    fn test_stats_bucket_edges() {
        // 4.5 belongs to the "5" bucket ([4.5, 5.5)), 4.4 to the "4" bucket.
        let stats = rating_stats(&[4.5, 4.4]);
        assert_eq!(stats.percentages["5"], 50.0);
        assert_eq!(stats.percentages["4"], 50.0);
    }
}
