pub mod strings_xml;
