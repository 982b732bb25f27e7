mod episode;

pub use episode::Episode;
