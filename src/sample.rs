//! Sample data generator.
//!
//! Builds a handful of random trees with `adjective-noun` code names. The
//! random source is always passed in, so a seed reproduces the same data.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;
use uuid::Builder;

use crate::folder::{Folder, OrgId, default_org_id, descendant_prefix};

/// Number of root trees generated.
pub const MAX_ROOT_SET: usize = 4;
/// Maximum children per node.
pub const MAX_CHILD: usize = 4;
/// Maximum depth of a tree (roots are depth 1).
pub const MAX_DEPTH: usize = 5;

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "calm", "clever", "cosmic", "crimson", "daring", "eager", "fancy",
    "gentle", "golden", "happy", "hidden", "humble", "jolly", "keen", "lively", "lucky", "mighty",
    "noble", "proud", "quiet", "rapid", "royal", "shiny", "silent", "steady", "swift", "tidy",
    "vivid", "witty",
];

const NOUNS: &[&str] = &[
    "badger", "beacon", "cobra", "comet", "condor", "falcon", "ferret", "gecko", "glacier",
    "harbor", "heron", "jaguar", "kestrel", "lynx", "magnet", "meadow", "nebula", "otter",
    "panther", "phoenix", "quasar", "raven", "sparrow", "spider", "thunder", "tiger", "valkyrie",
    "viper", "walrus", "wizard", "wolf", "zephyr",
];

/// Generate sample folders from a fixed seed.
pub fn generate_seeded(seed: u64) -> Vec<Folder> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(&mut rng)
}

/// Generate `MAX_ROOT_SET` trees. Every third tree (starting with the first)
/// belongs to a freshly drawn organization; the rest use the default one.
pub fn generate<R: Rng>(rng: &mut R) -> Vec<Folder> {
    let mut names = NamePool::default();
    let mut out = Vec::new();

    for i in 0..MAX_ROOT_SET {
        let org_id = if i % 3 == 0 {
            random_org_id(rng)
        } else {
            default_org_id()
        };
        let name = names.next(rng);
        let root = Folder::new(name.clone(), org_id, name);
        grow(rng, &mut names, root, 1, &mut out);
    }

    debug!(count = out.len(), "Generated sample folders");
    out
}

/// Push `node` then, depth-first, a random number of children below it.
fn grow<R: Rng>(
    rng: &mut R,
    names: &mut NamePool,
    node: Folder,
    depth: usize,
    out: &mut Vec<Folder>,
) {
    let parent_path = node.paths.clone();
    let org_id = node.org_id;
    out.push(node);

    if depth >= MAX_DEPTH {
        return;
    }

    let children = rng.gen_range(1..=MAX_CHILD);
    for _ in 0..children {
        let name = names.next(rng);
        let mut path = descendant_prefix(&parent_path);
        path.push_str(&name);
        grow(rng, names, Folder::new(name, org_id, path), depth + 1, out);
    }
}

fn random_org_id<R: Rng>(rng: &mut R) -> OrgId {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

/// Hands out code names not yet used in this generated set.
#[derive(Default)]
struct NamePool {
    used: HashSet<String>,
}

impl NamePool {
    fn next<R: Rng>(&mut self, rng: &mut R) -> String {
        // 32 * 32 pairs; fall back to a numeric suffix once collisions pile up.
        for _ in 0..16 {
            let candidate = Self::pick(rng);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
        let base = Self::pick(rng);
        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    fn pick<R: Rng>(rng: &mut R) -> String {
        let adj = ADJECTIVES.choose(rng).copied().unwrap_or("plain");
        let noun = NOUNS.choose(rng).copied().unwrap_or("folder");
        format!("{adj}-{noun}")
    }
}
