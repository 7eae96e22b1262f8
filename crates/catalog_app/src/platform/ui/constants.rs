pub const ERROR_TEXT: &str = "Failed to load accessories. Please try again later.";
pub const RELOAD_LABEL: &str = "Reload";
pub const EMPTY_TEXT: &str = "There are no accessories products matching the query";
pub const LOADING_TEXT: &str = "Loading...";
pub const CHANGING_TEXT: &str = "Updating list...";
pub const SORT_LABEL: &str = "Sort by";
pub const PER_PAGE_LABEL: &str = "Items on page";

pub const HELP_TEXT: &str = "\
Commands:
  sort <newest|alphabetically|cheapest>
  per-page <4|8|16|all>
  page <n> | next | prev
  search <text>      (empty text clears the filter)
  reload
  help | quit";
