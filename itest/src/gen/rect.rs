# [allow (unused_imports)] use :: gi :: sys :: { AllocKind , ManagedPtr , RawPtr } ; # [allow (unused_imports)] use :: gi :: registry :: { ClassInfo , TypeKind } ; # [allow (unused_imports)] use :: gi :: obj :: { GiClass , StructType } ; # [doc = "Boxed struct `DemoRect`, 32 bytes."] # [derive (Clone , Debug)] pub struct Rect { managed : ManagedPtr , } impl GiClass for Rect { const CLASS_INFO : & 'static ClassInfo = & ClassInfo :: new ("Rect" , TypeKind :: Struct) ; } impl StructType for Rect { const SIZE : usize = 32 ; const ALLOC : AllocKind = AllocKind :: Boxed ; fn from_managed (managed : ManagedPtr) -> Self { Self { managed } } fn managed (& self) -> & ManagedPtr { & self . managed } } impl :: gi :: obj :: Construct for Rect { type Class = Rect ; fn construct_with (interface : & :: gi :: obj :: InterfaceRef , ops : Vec < :: gi :: obj :: AttrOp < Self , :: gi :: obj :: ForNew >> ,) -> Result < Self , :: gi :: meta :: error :: AttrError > { :: gi :: obj :: construct_zeroed (interface , ops) } } # [doc = "Allocates a zero-filled `Rect`.\n\n# Panics\nIf the allocator fails."] pub fn new_zero_rect () -> Rect { :: gi :: obj :: new_zeroed () } # [doc = "Reads `Rect.x` (`gdouble`)."] pub fn rect_read_x (instance : & Rect) -> f64 { :: gi :: obj :: read_field (instance , 0) } # [doc = "Writes `Rect.x`."] pub fn rect_write_x (instance : & mut Rect , value : f64) { :: gi :: obj :: write_field (instance , 0 , value) } # [doc = "Reads `Rect.y` (`gdouble`)."] pub fn rect_read_y (instance : & Rect) -> f64 { :: gi :: obj :: read_field (instance , 8) } # [doc = "Writes `Rect.y`."] pub fn rect_write_y (instance : & mut Rect , value : f64) { :: gi :: obj :: write_field (instance , 8 , value) } # [doc = "Reads `Rect.name` (`const gchar*`)."] # [doc = r""] # [doc = r" The string is copied; ownership of the C string stays with the struct."] pub fn rect_read_name (instance : & Rect) -> Option < String > { :: gi :: obj :: read_string_field (instance , 16) } # [doc = "Reads `Rect.filled` (`gboolean`)."] pub fn rect_read_filled (instance : & Rect) -> bool { :: gi :: obj :: read_field (instance , 24) } # [doc = "Writes `Rect.filled`."] pub fn rect_write_filled (instance : & mut Rect , value : bool) { :: gi :: obj :: write_field (instance , 24 , value) }