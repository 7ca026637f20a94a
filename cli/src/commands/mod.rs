pub mod reclaim;
