//! Test fixtures
//!
//! Factory functions and sample feeds with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::domain::entities::FeedEntry;

/// Create a test feed entry for the 1.1.7 release
pub fn test_entry() -> FeedEntry {
    FeedEntry {
        title: "SVNKit 1.1.7".to_string(),
        link: Some("http://www.svnkit.com/download/1.1.7/".to_string()),
        published: Some(Utc.with_ymd_and_hms(2008, 3, 14, 18, 30, 0).unwrap()),
        summary: Some("Bugfix release.".to_string()),
    }
}

/// Create a test feed entry with a specific title
pub fn test_entry_titled(title: &str) -> FeedEntry {
    FeedEntry {
        title: title.to_string(),
        ..test_entry()
    }
}

/// RSS 2.0 feed with three releases, deliberately out of date order
pub const RSS2_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>SVNKit</title>
    <link>http://www.svnkit.com/</link>
    <description>SVNKit releases</description>
    <item>
      <title>SVNKit 1.1.6</title>
      <link>download/1.1.6/</link>
      <description><![CDATA[<p>Fixes svn:externals &amp; locking.</p>]]></description>
      <pubDate>Mon, 04 Feb 2008 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>SVNKit 1.1.7</title>
      <link>http://www.svnkit.com/download/1.1.7/</link>
      <description>Bugfix release.</description>
      <pubDate>Fri, 14 Mar 2008 18:30:00 GMT</pubDate>
    </item>
    <item>
      <title>SVNKit 1.1.5 &amp; friends</title>
      <link>http://www.svnkit.com/download/1.1.5/</link>
      <pubDate>Tue, 13 Nov 2007 09:15:00 GMT</pubDate>
    </item>
  </channel>
</rss>
"#;

/// RSS 1.0 (RDF) feed with a single release
pub const RSS1_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns="http://purl.org/rss/1.0/"
         xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel rdf:about="http://www.svnkit.com/">
    <title>SVNKit</title>
    <link>http://www.svnkit.com/</link>
    <description>SVNKit releases</description>
    <items>
      <rdf:Seq>
        <rdf:li rdf:resource="http://www.svnkit.com/download/1.1.7/"/>
      </rdf:Seq>
    </items>
  </channel>
  <item rdf:about="http://www.svnkit.com/download/1.1.7/">
    <title>SVNKit 1.1.7</title>
    <link>http://www.svnkit.com/download/1.1.7/</link>
    <description>Bugfix release.</description>
    <dc:date>2008-03-14T18:30:00Z</dc:date>
  </item>
</rdf:RDF>
"#;
