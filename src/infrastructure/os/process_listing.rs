use crate::domain::ports::ListingCommand;

// `pcpu` sits in the seventh whitespace-separated column of both the
// Linux and macOS format strings below.

#[cfg(target_os = "linux")]
const PS: ListingCommand = ListingCommand {
    program: "/bin/ps",
    args: &["axwo", "stat uid pid ppid vsz rss pcpu etime comm"],
    cpu_field: Some(6),
};

#[cfg(target_os = "macos")]
const PS: ListingCommand = ListingCommand {
    program: "/bin/ps",
    args: &["axwo", "state uid pid ppid vsz rss pcpu etime ucomm"],
    cpu_field: Some(6),
};

// No sortable CPU column on the remaining platforms; the listing is
// shown in the order the command produced it.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
const PS: ListingCommand = ListingCommand {
    program: "ps",
    args: &["-ef"],
    cpu_field: None,
};

/// Process-listing invocation for the build platform.
#[must_use]
pub const fn platform_listing() -> &'static ListingCommand {
    &PS
}
