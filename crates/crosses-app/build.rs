//! Build script embedding the git commit hash via vergen-gitcl.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only `VERGEN_GIT_SHA` is read, by `version::build_version`.
    let gitcl = GitclBuilder::default().sha(false).build()?;

    Emitter::default().add_instructions(&gitcl)?.emit()?;

    Ok(())
}
