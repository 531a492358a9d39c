# [allow (unused_imports)] use :: gi :: sys :: { AllocKind , ManagedPtr , RawPtr } ; # [allow (unused_imports)] use :: gi :: registry :: { ClassInfo , TypeKind } ; # [allow (unused_imports)] use :: gi :: obj :: { GiClass , StructType } ; # [doc = "Plain struct `DemoPoint`, 8 bytes."] # [derive (Clone , Debug)] pub struct Point { managed : ManagedPtr , } impl GiClass for Point { const CLASS_INFO : & 'static ClassInfo = & ClassInfo :: new ("Point" , TypeKind :: Struct) ; } impl StructType for Point { const SIZE : usize = 8 ; const ALLOC : AllocKind = AllocKind :: Plain ; fn from_managed (managed : ManagedPtr) -> Self { Self { managed } } fn managed (& self) -> & ManagedPtr { & self . managed } } impl :: gi :: obj :: Construct for Point { type Class = Point ; fn construct_with (interface : & :: gi :: obj :: InterfaceRef , ops : Vec < :: gi :: obj :: AttrOp < Self , :: gi :: obj :: ForNew >> ,) -> Result < Self , :: gi :: meta :: error :: AttrError > { :: gi :: obj :: construct_zeroed (interface , ops) } } # [doc = "Allocates a zero-filled `Point`.\n\n# Panics\nIf the allocator fails."] pub fn new_zero_point () -> Point { :: gi :: obj :: new_zeroed () } # [doc = "Reads `Point.x` (`gint`)."] pub fn point_read_x (instance : & Point) -> i32 { :: gi :: obj :: read_field (instance , 0) } # [doc = "Writes `Point.x`."] pub fn point_write_x (instance : & mut Point , value : i32) { :: gi :: obj :: write_field (instance , 0 , value) } # [doc = "Reads `Point.y` (`gint`)."] pub fn point_read_y (instance : & Point) -> i32 { :: gi :: obj :: read_field (instance , 4) } # [doc = "Writes `Point.y`."] pub fn point_write_y (instance : & mut Point , value : i32) { :: gi :: obj :: write_field (instance , 4 , value) }