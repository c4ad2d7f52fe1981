use crate::DriverRecord;

/// Strict lexicographic ranking key, ascending:
/// pro tier first, then featured, then verified. Plus and free are not
/// distinguished by the tier key. All remaining ties keep the order of the
/// input sequence (`sort_by_key` is stable).
fn ranking_key(driver: &DriverRecord) -> (bool, bool, bool) {
    (
        !driver.membership_tier.is_pro(),
        !driver.featured,
        !driver.is_verified,
    )
}

/// Impose the display order on a filtered sequence.
pub fn rank(mut drivers: Vec<DriverRecord>) -> Vec<DriverRecord> {
    drivers.sort_by_key(ranking_key);
    drivers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MembershipTier;

    fn driver(id: i64, tier: MembershipTier, featured: bool, verified: bool) -> DriverRecord {
        DriverRecord {
            id,
            membership_tier: tier,
            featured,
            is_verified: verified,
            ..DriverRecord::default()
        }
    }

    fn ids(drivers: &[DriverRecord]) -> Vec<i64> {
        drivers.iter().map(|d| d.id).collect()
    }

    #[test]
    fn pro_before_featured_before_verified() {
        let ranked = rank(vec![
            driver(1, MembershipTier::Free, false, false),
            driver(2, MembershipTier::Free, false, true),
            driver(3, MembershipTier::Free, true, false),
            driver(4, MembershipTier::Pro, false, false),
        ]);

        assert_eq!(ids(&ranked), vec![4, 3, 2, 1]);
    }

    #[test]
    fn plus_does_not_outrank_free() {
        // The tier key only distinguishes pro; a plus driver and a free
        // driver with equal remaining keys keep their input order.
        let ranked = rank(vec![
            driver(1, MembershipTier::Free, false, true),
            driver(2, MembershipTier::Plus, false, true),
        ]);

        assert_eq!(ids(&ranked), vec![1, 2]);
    }

    #[test]
    fn fully_equal_keys_preserve_input_order() {
        let forward = rank(vec![
            driver(10, MembershipTier::Plus, true, true),
            driver(11, MembershipTier::Plus, true, true),
            driver(12, MembershipTier::Plus, true, true),
        ]);
        assert_eq!(ids(&forward), vec![10, 11, 12]);

        let reversed = rank(vec![
            driver(12, MembershipTier::Plus, true, true),
            driver(11, MembershipTier::Plus, true, true),
            driver(10, MembershipTier::Plus, true, true),
        ]);
        assert_eq!(ids(&reversed), vec![12, 11, 10]);
    }

    #[test]
    fn featured_pro_sorts_above_plain_pro() {
        let ranked = rank(vec![
            driver(1, MembershipTier::Pro, false, true),
            driver(2, MembershipTier::Pro, true, false),
        ]);

        assert_eq!(ids(&ranked), vec![2, 1]);
    }
}
