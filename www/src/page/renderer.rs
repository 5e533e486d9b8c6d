//! Download page renderer
//!
//! Renders the "Get SVNKit Library" page. Everything except the release
//! feed fragment is fixed markup.

use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;

/// Declared in both the `Content-Type` header and the page's meta tag
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=iso-8859-1";

const HEAD: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<title>Get SVNKit Library</title>
<meta name="keywords" content="Subversion,SVN,Version Control,Java,Library,Development,Team,Teamwork,Configuration Management,Software Configuration Management,SCM,CM,Revision Control,Collaboration,Open Source,Software Development,Collaborative Software Development" />
<meta name="description" content="Pure Java Subversion Library. Open Source, provided by TMate Software" />
<meta http-equiv="Content-Type" content="text/html; charset=iso-8859-1" />
<link rel="stylesheet" type="text/css" media="screen" href="../css/home.css" />
</head>
"#;

const LAYOUT_OPEN: &str = r#"<body>
<table bgcolor="white" width="900" cellpadding="0" align="center" style="height: 100%;" border="0" cellspacing="0">
<tr align="center" valign="top">
<td colspan="1" rowspan="1">
<div class="leftedge">
<div class="rightedge">
<table cellpadding="0" align="center" width="870" style="height: 100%;" border="0" cellspacing="0">
<tr align="center" valign="top">
<td align="left" valign="top" style="padding: 20px 20px 20px 20px;">
"#;

const BANNER: &str = r#"<p>
<span class="svnkit"><a style="border-bottom: 0px; color: rgb(51, 102, 153);" href="/">SVNKit</a>&nbsp;</span><span style="font-size: 140%; font-weight: bold;">The only pure Java&#153; Subversion client library in the world!</span>
</p>
<div style="border-bottom: 1px solid #ccc;"></div>
<small><a href="../index.html" style="border-bottom: 0px;">Home</a> :: Get Library</small>
"#;

const DEVELOPMENT_VERSION: &str = r#"<h4>Get Latest Development Version</h4>
<p>
To browse source code visit <a id="normal" href="http://svn.svnkit.com/repos/svnkit/">http://svn.svnkit.com/repos/svnkit/</a>
<br />To get the latest source code (with the SVN command line client) use the following command:
</p>
<pre>$ svn co http://svn.svnkit.com/repos/svnkit/trunk/</pre>
<br />
"#;

const ECLIPSE_PLUGIN: &str = r#"<h4>Get SVNKit Eclipse Plugin from update site</h4>
<p>To get an Eclipse plugin version use <b>http://svnkit.com/</b> as an update site location in Eclipse Update Manager.
In Eclipse menu select Help-&gt;Software Updates-&gt;Find and Install... Then choose 'Search for new features to install' combo
box, click 'Next', then click 'New Remote Site...' and type <b>http://svnkit.com/</b> in the URL field and your preferred
name for the update site in the name field. After this check the new site (it should appear in the list of update sites) and
follow further steps prompted by Eclipse.
</p>
"#;

const STABLE_VERSION_OPEN: &str = r#"<h4>Latest Stable Version</h4>
<table id="latest-stable" width="100%">
<tbody>
"#;

const STABLE_VERSION_CLOSE: &str = r#"</tbody>
</table>
"#;

const FEED_LINKS: &str = r#"<table cellpadding="0" border="0" cellspacing="0" width="100%">
<tr>
<td align="right" width="100%"><a style="text-decoration: none; border: 0px;" href="rss.xml"><span style="font-family: Arial; font-size: 9px; background: #ff6000; color: #fff; padding: 0 4px">rss&nbsp;1.0</span></a>
<a style="text-decoration: none; border: 0px;" href="rss2.xml"><span style="font-family: Arial; font-size: 9px; background: #ff6000; color: #fff; padding: 0 4px">rss&nbsp;2.0</span></a></td>
</tr>
</table>
"#;

const FOOTER: &str = r#"<table style="margin-top: 1em;" width="100%" cellpadding="0" cellspacing="0">
<tr><td id="footer" align="left" valign="top">Copyright &copy; 2004-2008, TMate Software</td><td align="right" valign="top" id="footer-feedback">feedback is welcome at <a href="mailto:feedback%40svnkit.com">feedback@svnkit.com</a></td></tr>
<tr><td colspan="2" id="footer2">Java&#153; and all Java-based marks are a trademark or registered trademark of Sun Microsystems, Inc, in the United States and other countries.
TMate Software and the website svnkit.com are independent of Sun Microsystems, Inc. and have no relationship, formal or informal.
</td></tr>
</table>
"#;

const LAYOUT_CLOSE: &str = r#"</td>
</tr>
</table>
</div>
</div>
</td>
</tr>
</table>
</body>
</html>
"#;

/// Render the download page with `feed_fragment` inlined into the
/// "Latest Stable Version" table body
pub fn render_download_page(feed_fragment: &str) -> String {
    let mut buf = String::with_capacity(8 * 1024 + feed_fragment.len());

    buf.push_str(HEAD);
    buf.push_str(LAYOUT_OPEN);
    buf.push_str(BANNER);
    buf.push_str(DEVELOPMENT_VERSION);
    buf.push_str(ECLIPSE_PLUGIN);

    buf.push_str(STABLE_VERSION_OPEN);
    buf.push_str(feed_fragment);
    buf.push_str(STABLE_VERSION_CLOSE);
    buf.push_str(FEED_LINKS);

    buf.push_str(FOOTER);
    buf.push_str(LAYOUT_CLOSE);

    buf
}

/// Encode a rendered page for the declared ISO-8859-1 charset.
///
/// Characters the charset cannot carry become numeric character references.
/// C1 controls (U+0080 to U+009F) are dropped: browsers read `iso-8859-1`
/// as windows-1252, where those code points are printable glyphs.
pub fn encode_page(html: &str) -> Vec<u8> {
    let html: Cow<'_, str> = if html.chars().any(is_c1_control) {
        Cow::Owned(html.chars().filter(|c| !is_c1_control(*c)).collect())
    } else {
        Cow::Borrowed(html)
    };

    let (bytes, _, _) = WINDOWS_1252.encode(&html);
    bytes.into_owned()
}

fn is_c1_control(c: char) -> bool {
    ('\u{80}'..='\u{9f}').contains(&c)
}
