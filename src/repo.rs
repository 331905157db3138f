//! Repository address parsing for `<project>/<slug>` fullnames.

// self
use crate::{
	_prelude::*,
	auth::{ProjectKey, RepositorySlug},
	obs::{self, OpSpan},
};

const SEPARATOR: char = '/';

/// Structured form of a Bitbucket repository fullname.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryAddress {
	/// Project key segment.
	pub project: ProjectKey,
	/// Repository slug segment.
	pub slug: RepositorySlug,
}
impl RepositoryAddress {
	/// Splits `fullname` on every `/` and accepts exactly two segments.
	///
	/// Segments are returned verbatim: no trimming, case folding, or percent-decoding
	/// happens, and empty segments (`"/slug"`, `"project/"`) are accepted. Callers that need
	/// non-empty segments must check [`RepositoryAddress::has_empty_segment`].
	pub fn parse(fullname: &str) -> Result<Self> {
		let span = OpSpan::for_fullname(fullname);
		let result = span.run(|| {
			let mut segments = fullname.split(SEPARATOR);

			match (segments.next(), segments.next(), segments.next()) {
				(Some(project), Some(slug), None) =>
					Ok(Self { project: ProjectKey::new(project), slug: RepositorySlug::new(slug) }),
				_ => {
					obs::record_rejected_fullname(fullname.split(SEPARATOR).count());

					Err(Error::MalformedIdentifier { fullname: fullname.to_owned() })
				},
			}
		});

		span.finish(&result);

		result
	}

	/// Returns `true` if either segment is empty.
	pub fn has_empty_segment(&self) -> bool {
		self.project.is_empty() || self.slug.is_empty()
	}

	/// Renders the canonical `<project>/<slug>` fullname.
	pub fn fullname(&self) -> String {
		self.to_string()
	}
}
impl Display for RepositoryAddress {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}{SEPARATOR}{}", self.project, self.slug)
	}
}
impl FromStr for RepositoryAddress {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
