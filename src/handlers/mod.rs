// Two security tiers: public (token acquisition) and protected (bearer required)
pub mod protected;
pub mod public;
