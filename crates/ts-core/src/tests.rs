//! Unit tests for ts-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, IntersectionId, StreetId};

    #[test]
    fn index_roundtrip() {
        let id = StreetId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StreetId::try_from(42usize).unwrap(), id);
        assert_eq!(usize::from(CarId(7)), 7);
    }

    #[test]
    fn ordering() {
        assert!(CarId(0) < CarId(1));
        assert!(IntersectionId(100) > IntersectionId(99));
    }

    #[test]
    fn try_from_rejects_oversized() {
        assert!(CarId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "car#7");
        assert_eq!(IntersectionId(0).to_string(), "intersection#0");
        assert_eq!(StreetId(3).to_string(), "street#3");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn tick_arithmetic_saturates() {
        assert_eq!(Tick(u64::MAX - 1) + 5, Tick(u64::MAX));
        assert_eq!(Tick(3) - Tick(10), 0);
    }

    #[test]
    fn clock_runs_inclusive_horizon() {
        let cfg = SimConfig::new(3, 0);
        let mut clock = SimClock::new();
        let mut visited = Vec::new();
        while !clock.is_past(cfg.end_tick()) {
            visited.push(clock.current_tick.0);
            clock.advance();
        }
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }

    #[test]
    fn score_on_time() {
        let cfg = SimConfig::new(10, 1000);
        assert_eq!(cfg.score_for_arrival(Tick(5)), 1005);
        assert_eq!(cfg.score_for_arrival(Tick(0)), 1010);
    }

    #[test]
    fn score_exactly_at_horizon_gets_bonus_only() {
        let cfg = SimConfig::new(10, 1000);
        assert_eq!(cfg.score_for_arrival(Tick(10)), 1000);
    }

    #[test]
    fn score_late_is_zero() {
        let cfg = SimConfig::new(10, 1000);
        assert_eq!(cfg.score_for_arrival(Tick(11)), 0);
        assert_eq!(cfg.score_for_arrival(Tick(u64::MAX)), 0);
    }

    #[test]
    fn score_saturates() {
        let cfg = SimConfig::new(u64::MAX, u64::MAX);
        assert_eq!(cfg.score_for_arrival(Tick(0)), u64::MAX);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000_000);
            let b: u32 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_are_reproducible() {
        let mut root_a = SimRng::new(7);
        let mut root_b = SimRng::new(7);
        let mut a = root_a.child(3);
        let mut b = root_b.child(3);
        let mut va: Vec<u32> = (0..20).collect();
        let mut vb: Vec<u32> = (0..20).collect();
        a.shuffle(&mut va);
        b.shuffle(&mut vb);
        assert_eq!(va, vb);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = SimRng::new(0);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(3..9u64);
            assert!((3..9).contains(&v));
        }
    }
}
